//! Typed enumerant groups.
//!
//! Each group converts losslessly into `GLenum` and back through `TryFrom`.
//! Parameters that accept enumerants outside these groups stay raw `GLenum`.

use crate::{
    error::{Error, Result},
    sys::{self, types::GLenum},
};
use std::fmt;

macro_rules! gl_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:ident,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum $name {
            $($(#[$vmeta])* $variant = sys::$value,)*
        }

        impl $name {
            /// The registry name of this value, e.g. `GL_ARRAY_BUFFER`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => concat!("GL_", stringify!($value)),)*
                }
            }
        }

        impl From<$name> for GLenum {
            fn from(value: $name) -> Self {
                value as GLenum
            }
        }

        impl TryFrom<GLenum> for $name {
            type Error = Error;

            fn try_from(value: GLenum) -> Result<Self> {
                match value {
                    $(sys::$value => Ok(Self::$variant),)*
                    _ => Err(Error::UnknownEnum {
                        value,
                        group: stringify!($name),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

gl_enum! {
    /// Binding points for buffer objects.
    pub enum BufferTarget {
        Array = ARRAY_BUFFER,
        AtomicCounter = ATOMIC_COUNTER_BUFFER,
        CopyRead = COPY_READ_BUFFER,
        CopyWrite = COPY_WRITE_BUFFER,
        DispatchIndirect = DISPATCH_INDIRECT_BUFFER,
        DrawIndirect = DRAW_INDIRECT_BUFFER,
        ElementArray = ELEMENT_ARRAY_BUFFER,
        Parameter = PARAMETER_BUFFER,
        PixelPack = PIXEL_PACK_BUFFER,
        PixelUnpack = PIXEL_UNPACK_BUFFER,
        Query = QUERY_BUFFER,
        ShaderStorage = SHADER_STORAGE_BUFFER,
        Texture = TEXTURE_BUFFER,
        TransformFeedback = TRANSFORM_FEEDBACK_BUFFER,
        Uniform = UNIFORM_BUFFER,
    }
}

gl_enum! {
    pub enum BufferUsage {
        StreamDraw = STREAM_DRAW,
        StreamRead = STREAM_READ,
        StreamCopy = STREAM_COPY,
        StaticDraw = STATIC_DRAW,
        StaticRead = STATIC_READ,
        StaticCopy = STATIC_COPY,
        DynamicDraw = DYNAMIC_DRAW,
        DynamicRead = DYNAMIC_READ,
        DynamicCopy = DYNAMIC_COPY,
    }
}

gl_enum! {
    /// Access policy for `glMapBuffer`.
    pub enum BufferAccess {
        ReadOnly = READ_ONLY,
        WriteOnly = WRITE_ONLY,
        ReadWrite = READ_WRITE,
    }
}

gl_enum! {
    /// Texture targets, including the cube map faces accepted by the
    /// `glTexImage2D` family.
    pub enum TextureTarget {
        Texture1D = TEXTURE_1D,
        Texture2D = TEXTURE_2D,
        Texture3D = TEXTURE_3D,
        Texture1DArray = TEXTURE_1D_ARRAY,
        Texture2DArray = TEXTURE_2D_ARRAY,
        Rectangle = TEXTURE_RECTANGLE,
        CubeMap = TEXTURE_CUBE_MAP,
        CubeMapArray = TEXTURE_CUBE_MAP_ARRAY,
        Buffer = TEXTURE_BUFFER,
        Texture2DMultisample = TEXTURE_2D_MULTISAMPLE,
        Texture2DMultisampleArray = TEXTURE_2D_MULTISAMPLE_ARRAY,
        CubeMapPositiveX = TEXTURE_CUBE_MAP_POSITIVE_X,
        CubeMapNegativeX = TEXTURE_CUBE_MAP_NEGATIVE_X,
        CubeMapPositiveY = TEXTURE_CUBE_MAP_POSITIVE_Y,
        CubeMapNegativeY = TEXTURE_CUBE_MAP_NEGATIVE_Y,
        CubeMapPositiveZ = TEXTURE_CUBE_MAP_POSITIVE_Z,
        CubeMapNegativeZ = TEXTURE_CUBE_MAP_NEGATIVE_Z,
        ProxyTexture1D = PROXY_TEXTURE_1D,
        ProxyTexture2D = PROXY_TEXTURE_2D,
        ProxyTexture3D = PROXY_TEXTURE_3D,
        ProxyCubeMap = PROXY_TEXTURE_CUBE_MAP,
        ProxyTexture1DArray = PROXY_TEXTURE_1D_ARRAY,
        ProxyTexture2DArray = PROXY_TEXTURE_2D_ARRAY,
        ProxyRectangle = PROXY_TEXTURE_RECTANGLE,
        ProxyCubeMapArray = PROXY_TEXTURE_CUBE_MAP_ARRAY,
        ProxyTexture2DMultisample = PROXY_TEXTURE_2D_MULTISAMPLE,
        ProxyTexture2DMultisampleArray = PROXY_TEXTURE_2D_MULTISAMPLE_ARRAY,
    }
}

gl_enum! {
    pub enum ShaderType {
        Vertex = VERTEX_SHADER,
        TessControl = TESS_CONTROL_SHADER,
        TessEvaluation = TESS_EVALUATION_SHADER,
        Geometry = GEOMETRY_SHADER,
        Fragment = FRAGMENT_SHADER,
        Compute = COMPUTE_SHADER,
    }
}

gl_enum! {
    pub enum PrimitiveType {
        Points = POINTS,
        Lines = LINES,
        LineLoop = LINE_LOOP,
        LineStrip = LINE_STRIP,
        Triangles = TRIANGLES,
        TriangleStrip = TRIANGLE_STRIP,
        TriangleFan = TRIANGLE_FAN,
        LinesAdjacency = LINES_ADJACENCY,
        LineStripAdjacency = LINE_STRIP_ADJACENCY,
        TrianglesAdjacency = TRIANGLES_ADJACENCY,
        TriangleStripAdjacency = TRIANGLE_STRIP_ADJACENCY,
        Patches = PATCHES,
    }
}

gl_enum! {
    /// Element type of index buffers.
    pub enum IndexType {
        UnsignedByte = UNSIGNED_BYTE,
        UnsignedShort = UNSIGNED_SHORT,
        UnsignedInt = UNSIGNED_INT,
    }
}

gl_enum! {
    /// Server-side capabilities toggled with `glEnable` and `glDisable`.
    pub enum Capability {
        Blend = BLEND,
        ClipDistance0 = CLIP_DISTANCE0,
        ClipDistance1 = CLIP_DISTANCE1,
        ClipDistance2 = CLIP_DISTANCE2,
        ClipDistance3 = CLIP_DISTANCE3,
        ClipDistance4 = CLIP_DISTANCE4,
        ClipDistance5 = CLIP_DISTANCE5,
        ClipDistance6 = CLIP_DISTANCE6,
        ClipDistance7 = CLIP_DISTANCE7,
        ColorLogicOp = COLOR_LOGIC_OP,
        CullFace = CULL_FACE,
        DebugOutput = DEBUG_OUTPUT,
        DebugOutputSynchronous = DEBUG_OUTPUT_SYNCHRONOUS,
        DepthClamp = DEPTH_CLAMP,
        DepthTest = DEPTH_TEST,
        Dither = DITHER,
        FramebufferSrgb = FRAMEBUFFER_SRGB,
        LineSmooth = LINE_SMOOTH,
        Multisample = MULTISAMPLE,
        PolygonOffsetFill = POLYGON_OFFSET_FILL,
        PolygonOffsetLine = POLYGON_OFFSET_LINE,
        PolygonOffsetPoint = POLYGON_OFFSET_POINT,
        PolygonSmooth = POLYGON_SMOOTH,
        PrimitiveRestart = PRIMITIVE_RESTART,
        PrimitiveRestartFixedIndex = PRIMITIVE_RESTART_FIXED_INDEX,
        ProgramPointSize = PROGRAM_POINT_SIZE,
        RasterizerDiscard = RASTERIZER_DISCARD,
        SampleAlphaToCoverage = SAMPLE_ALPHA_TO_COVERAGE,
        SampleAlphaToOne = SAMPLE_ALPHA_TO_ONE,
        SampleCoverage = SAMPLE_COVERAGE,
        SampleMask = SAMPLE_MASK,
        SampleShading = SAMPLE_SHADING,
        ScissorTest = SCISSOR_TEST,
        StencilTest = STENCIL_TEST,
        TextureCubeMapSeamless = TEXTURE_CUBE_MAP_SEAMLESS,
    }
}

gl_enum! {
    pub enum FramebufferTarget {
        Framebuffer = FRAMEBUFFER,
        Draw = DRAW_FRAMEBUFFER,
        Read = READ_FRAMEBUFFER,
    }
}

gl_enum! {
    pub enum FramebufferStatus {
        Complete = FRAMEBUFFER_COMPLETE,
        Undefined = FRAMEBUFFER_UNDEFINED,
        IncompleteAttachment = FRAMEBUFFER_INCOMPLETE_ATTACHMENT,
        IncompleteMissingAttachment = FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT,
        IncompleteDrawBuffer = FRAMEBUFFER_INCOMPLETE_DRAW_BUFFER,
        IncompleteReadBuffer = FRAMEBUFFER_INCOMPLETE_READ_BUFFER,
        Unsupported = FRAMEBUFFER_UNSUPPORTED,
        IncompleteMultisample = FRAMEBUFFER_INCOMPLETE_MULTISAMPLE,
        IncompleteLayerTargets = FRAMEBUFFER_INCOMPLETE_LAYER_TARGETS,
    }
}

gl_enum! {
    pub enum RenderbufferTarget {
        Renderbuffer = RENDERBUFFER,
    }
}

gl_enum! {
    /// Values returned by `glGetError`.
    pub enum ErrorCode {
        NoError = NO_ERROR,
        InvalidEnum = INVALID_ENUM,
        InvalidValue = INVALID_VALUE,
        InvalidOperation = INVALID_OPERATION,
        StackOverflow = STACK_OVERFLOW,
        StackUnderflow = STACK_UNDERFLOW,
        OutOfMemory = OUT_OF_MEMORY,
        InvalidFramebufferOperation = INVALID_FRAMEBUFFER_OPERATION,
        ContextLost = CONTEXT_LOST,
    }
}

gl_enum! {
    /// Names accepted by `glGetString` and `glGetStringi`.
    pub enum StringName {
        Vendor = VENDOR,
        Renderer = RENDERER,
        Version = VERSION,
        ShadingLanguageVersion = SHADING_LANGUAGE_VERSION,
        Extensions = EXTENSIONS,
        SpirvExtensions = SPIR_V_EXTENSIONS,
    }
}

gl_enum! {
    /// Results of `glClientWaitSync`.
    pub enum SyncStatus {
        AlreadySignaled = ALREADY_SIGNALED,
        TimeoutExpired = TIMEOUT_EXPIRED,
        ConditionSatisfied = CONDITION_SATISFIED,
        WaitFailed = WAIT_FAILED,
    }
}

gl_enum! {
    pub enum QueryTarget {
        SamplesPassed = SAMPLES_PASSED,
        AnySamplesPassed = ANY_SAMPLES_PASSED,
        AnySamplesPassedConservative = ANY_SAMPLES_PASSED_CONSERVATIVE,
        PrimitivesGenerated = PRIMITIVES_GENERATED,
        TransformFeedbackPrimitivesWritten = TRANSFORM_FEEDBACK_PRIMITIVES_WRITTEN,
        TimeElapsed = TIME_ELAPSED,
        Timestamp = TIMESTAMP,
        VerticesSubmitted = VERTICES_SUBMITTED,
        PrimitivesSubmitted = PRIMITIVES_SUBMITTED,
        VertexShaderInvocations = VERTEX_SHADER_INVOCATIONS,
        TessControlShaderPatches = TESS_CONTROL_SHADER_PATCHES,
        TessEvaluationShaderInvocations = TESS_EVALUATION_SHADER_INVOCATIONS,
        GeometryShaderInvocations = GEOMETRY_SHADER_INVOCATIONS,
        GeometryShaderPrimitivesEmitted = GEOMETRY_SHADER_PRIMITIVES_EMITTED,
        FragmentShaderInvocations = FRAGMENT_SHADER_INVOCATIONS,
        ComputeShaderInvocations = COMPUTE_SHADER_INVOCATIONS,
        ClippingInputPrimitives = CLIPPING_INPUT_PRIMITIVES,
        ClippingOutputPrimitives = CLIPPING_OUTPUT_PRIMITIVES,
        TransformFeedbackOverflow = TRANSFORM_FEEDBACK_OVERFLOW,
        TransformFeedbackStreamOverflow = TRANSFORM_FEEDBACK_STREAM_OVERFLOW,
    }
}

gl_enum! {
    pub enum BlendEquation {
        Add = FUNC_ADD,
        Subtract = FUNC_SUBTRACT,
        ReverseSubtract = FUNC_REVERSE_SUBTRACT,
        Min = MIN,
        Max = MAX,
    }
}

gl_enum! {
    pub enum BlendFactor {
        Zero = ZERO,
        One = ONE,
        SrcColor = SRC_COLOR,
        OneMinusSrcColor = ONE_MINUS_SRC_COLOR,
        DstColor = DST_COLOR,
        OneMinusDstColor = ONE_MINUS_DST_COLOR,
        SrcAlpha = SRC_ALPHA,
        OneMinusSrcAlpha = ONE_MINUS_SRC_ALPHA,
        DstAlpha = DST_ALPHA,
        OneMinusDstAlpha = ONE_MINUS_DST_ALPHA,
        ConstantColor = CONSTANT_COLOR,
        OneMinusConstantColor = ONE_MINUS_CONSTANT_COLOR,
        ConstantAlpha = CONSTANT_ALPHA,
        OneMinusConstantAlpha = ONE_MINUS_CONSTANT_ALPHA,
        SrcAlphaSaturate = SRC_ALPHA_SATURATE,
        Src1Color = SRC1_COLOR,
        OneMinusSrc1Color = ONE_MINUS_SRC1_COLOR,
        Src1Alpha = SRC1_ALPHA,
        OneMinusSrc1Alpha = ONE_MINUS_SRC1_ALPHA,
    }
}

gl_enum! {
    /// Comparison used by depth, stencil and sampler compare modes.
    pub enum CompareFunc {
        Never = NEVER,
        Less = LESS,
        Equal = EQUAL,
        LessOrEqual = LEQUAL,
        Greater = GREATER,
        NotEqual = NOTEQUAL,
        GreaterOrEqual = GEQUAL,
        Always = ALWAYS,
    }
}

gl_enum! {
    pub enum StencilOp {
        Keep = KEEP,
        Zero = ZERO,
        Replace = REPLACE,
        Increment = INCR,
        IncrementWrap = INCR_WRAP,
        Decrement = DECR,
        DecrementWrap = DECR_WRAP,
        Invert = INVERT,
    }
}

gl_enum! {
    pub enum Face {
        Front = FRONT,
        Back = BACK,
        FrontAndBack = FRONT_AND_BACK,
    }
}

gl_enum! {
    pub enum FrontFaceDirection {
        Clockwise = CW,
        CounterClockwise = CCW,
    }
}

gl_enum! {
    pub enum PolygonMode {
        Point = POINT,
        Line = LINE,
        Fill = FILL,
    }
}

gl_enum! {
    /// Component types accepted by the vertex attribute format calls.
    pub enum VertexAttribType {
        Byte = BYTE,
        UnsignedByte = UNSIGNED_BYTE,
        Short = SHORT,
        UnsignedShort = UNSIGNED_SHORT,
        Int = INT,
        UnsignedInt = UNSIGNED_INT,
        HalfFloat = HALF_FLOAT,
        Float = FLOAT,
        Double = DOUBLE,
        Fixed = FIXED,
        Int2101010Rev = INT_2_10_10_10_REV,
        UnsignedInt2101010Rev = UNSIGNED_INT_2_10_10_10_REV,
        UnsignedInt10f11f11fRev = UNSIGNED_INT_10F_11F_11F_REV,
    }
}

gl_enum! {
    pub enum TransformFeedbackMode {
        Points = POINTS,
        Lines = LINES,
        Triangles = TRIANGLES,
    }
}

gl_enum! {
    pub enum ProvokingVertexMode {
        First = FIRST_VERTEX_CONVENTION,
        Last = LAST_VERTEX_CONVENTION,
    }
}

gl_enum! {
    pub enum LogicOp {
        Clear = CLEAR,
        And = AND,
        AndReverse = AND_REVERSE,
        Copy = COPY,
        AndInverted = AND_INVERTED,
        Noop = NOOP,
        Xor = XOR,
        Or = OR,
        Nor = NOR,
        Equiv = EQUIV,
        Invert = INVERT,
        OrReverse = OR_REVERSE,
        CopyInverted = COPY_INVERTED,
        OrInverted = OR_INVERTED,
        Nand = NAND,
        Set = SET,
    }
}

gl_enum! {
    pub enum DebugSource {
        Api = DEBUG_SOURCE_API,
        WindowSystem = DEBUG_SOURCE_WINDOW_SYSTEM,
        ShaderCompiler = DEBUG_SOURCE_SHADER_COMPILER,
        ThirdParty = DEBUG_SOURCE_THIRD_PARTY,
        Application = DEBUG_SOURCE_APPLICATION,
        Other = DEBUG_SOURCE_OTHER,
    }
}

gl_enum! {
    pub enum DebugType {
        Error = DEBUG_TYPE_ERROR,
        DeprecatedBehavior = DEBUG_TYPE_DEPRECATED_BEHAVIOR,
        UndefinedBehavior = DEBUG_TYPE_UNDEFINED_BEHAVIOR,
        Portability = DEBUG_TYPE_PORTABILITY,
        Performance = DEBUG_TYPE_PERFORMANCE,
        Marker = DEBUG_TYPE_MARKER,
        PushGroup = DEBUG_TYPE_PUSH_GROUP,
        PopGroup = DEBUG_TYPE_POP_GROUP,
        Other = DEBUG_TYPE_OTHER,
    }
}

gl_enum! {
    pub enum DebugSeverity {
        High = DEBUG_SEVERITY_HIGH,
        Medium = DEBUG_SEVERITY_MEDIUM,
        Low = DEBUG_SEVERITY_LOW,
        Notification = DEBUG_SEVERITY_NOTIFICATION,
    }
}
