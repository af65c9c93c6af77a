//! Bitfield parameters.

use crate::sys::{self, types::GLbitfield};
use bitflags::bitflags;

bitflags! {
    /// Buffers cleared by `glClear` and copied by `glBlitFramebuffer`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ClearMask: GLbitfield {
        const COLOR = sys::COLOR_BUFFER_BIT;
        const DEPTH = sys::DEPTH_BUFFER_BIT;
        const STENCIL = sys::STENCIL_BUFFER_BIT;
    }
}

bitflags! {
    /// Access flags for `glMapBufferRange`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MapAccess: GLbitfield {
        const READ = sys::MAP_READ_BIT;
        const WRITE = sys::MAP_WRITE_BIT;
        const INVALIDATE_RANGE = sys::MAP_INVALIDATE_RANGE_BIT;
        const INVALIDATE_BUFFER = sys::MAP_INVALIDATE_BUFFER_BIT;
        const FLUSH_EXPLICIT = sys::MAP_FLUSH_EXPLICIT_BIT;
        const UNSYNCHRONIZED = sys::MAP_UNSYNCHRONIZED_BIT;
        const PERSISTENT = sys::MAP_PERSISTENT_BIT;
        const COHERENT = sys::MAP_COHERENT_BIT;
    }
}

bitflags! {
    /// Flags for immutable buffer storage.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BufferStorageFlags: GLbitfield {
        const DYNAMIC_STORAGE = sys::DYNAMIC_STORAGE_BIT;
        const CLIENT_STORAGE = sys::CLIENT_STORAGE_BIT;
        const MAP_READ = sys::MAP_READ_BIT;
        const MAP_WRITE = sys::MAP_WRITE_BIT;
        const MAP_PERSISTENT = sys::MAP_PERSISTENT_BIT;
        const MAP_COHERENT = sys::MAP_COHERENT_BIT;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct MemoryBarrier: GLbitfield {
        const VERTEX_ATTRIB_ARRAY = sys::VERTEX_ATTRIB_ARRAY_BARRIER_BIT;
        const ELEMENT_ARRAY = sys::ELEMENT_ARRAY_BARRIER_BIT;
        const UNIFORM = sys::UNIFORM_BARRIER_BIT;
        const TEXTURE_FETCH = sys::TEXTURE_FETCH_BARRIER_BIT;
        const SHADER_IMAGE_ACCESS = sys::SHADER_IMAGE_ACCESS_BARRIER_BIT;
        const COMMAND = sys::COMMAND_BARRIER_BIT;
        const PIXEL_BUFFER = sys::PIXEL_BUFFER_BARRIER_BIT;
        const TEXTURE_UPDATE = sys::TEXTURE_UPDATE_BARRIER_BIT;
        const BUFFER_UPDATE = sys::BUFFER_UPDATE_BARRIER_BIT;
        const CLIENT_MAPPED_BUFFER = sys::CLIENT_MAPPED_BUFFER_BARRIER_BIT;
        const QUERY_BUFFER = sys::QUERY_BUFFER_BARRIER_BIT;
        const FRAMEBUFFER = sys::FRAMEBUFFER_BARRIER_BIT;
        const TRANSFORM_FEEDBACK = sys::TRANSFORM_FEEDBACK_BARRIER_BIT;
        const ATOMIC_COUNTER = sys::ATOMIC_COUNTER_BARRIER_BIT;
        const SHADER_STORAGE = sys::SHADER_STORAGE_BARRIER_BIT;
        const ALL = sys::ALL_BARRIER_BITS;
    }
}

bitflags! {
    /// Shader stages bound by `glUseProgramStages`.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ProgramStages: GLbitfield {
        const VERTEX = sys::VERTEX_SHADER_BIT;
        const TESS_CONTROL = sys::TESS_CONTROL_SHADER_BIT;
        const TESS_EVALUATION = sys::TESS_EVALUATION_SHADER_BIT;
        const GEOMETRY = sys::GEOMETRY_SHADER_BIT;
        const FRAGMENT = sys::FRAGMENT_SHADER_BIT;
        const COMPUTE = sys::COMPUTE_SHADER_BIT;
        const ALL = sys::ALL_SHADER_BITS;
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SyncFlags: GLbitfield {
        const FLUSH_COMMANDS = sys::SYNC_FLUSH_COMMANDS_BIT;
    }
}
