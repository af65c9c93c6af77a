//! The GL 4.6 core command surface, one module per area, each adding
//! methods to [`Gl`](crate::Gl).

use crate::sys;

mod buffer;
mod debug;
pub(crate) mod draw;
mod framebuffer;
pub(crate) mod program;
mod query;
mod sampler;
mod shader;
mod state;
mod sync;
mod texture;
mod transform_feedback;
mod uniform;
mod vertex;

pub use draw::buffer_offset;
pub use program::ActiveVariable;

/// Commands the registry lists for the 4.6 core slice that compatibility
/// profile contexts alone provide. They have no [`Gl`](crate::Gl) method.
pub const COMPATIBILITY_ONLY: &[&str] = &[
    "glColorP3ui",
    "glColorP3uiv",
    "glColorP4ui",
    "glColorP4uiv",
    "glGetnColorTable",
    "glGetnConvolutionFilter",
    "glGetnHistogram",
    "glGetnMapdv",
    "glGetnMapfv",
    "glGetnMapiv",
    "glGetnMinmax",
    "glGetnPixelMapfv",
    "glGetnPixelMapuiv",
    "glGetnPixelMapusv",
    "glGetnPolygonStipple",
    "glGetnSeparableFilter",
    "glMultiTexCoordP1ui",
    "glMultiTexCoordP1uiv",
    "glMultiTexCoordP2ui",
    "glMultiTexCoordP2uiv",
    "glMultiTexCoordP3ui",
    "glMultiTexCoordP3uiv",
    "glMultiTexCoordP4ui",
    "glMultiTexCoordP4uiv",
    "glNormalP3ui",
    "glNormalP3uiv",
    "glSecondaryColorP3ui",
    "glSecondaryColorP3uiv",
    "glTexCoordP1ui",
    "glTexCoordP1uiv",
    "glTexCoordP2ui",
    "glTexCoordP2uiv",
    "glTexCoordP3ui",
    "glTexCoordP3uiv",
    "glTexCoordP4ui",
    "glTexCoordP4uiv",
    "glVertexP2ui",
    "glVertexP2uiv",
    "glVertexP3ui",
    "glVertexP3uiv",
    "glVertexP4ui",
    "glVertexP4uiv",
];

/// Every loaded-table command that has a [`Gl`](crate::Gl) method.
pub fn typed_commands() -> impl Iterator<Item = &'static str> {
    sys::COMMANDS
        .iter()
        .copied()
        .filter(|name| !COMPATIBILITY_ONLY.contains(name))
}
