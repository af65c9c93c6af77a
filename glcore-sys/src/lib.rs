#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(clippy::all)]

include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
include!(concat!(env!("OUT_DIR"), "/gl_commands.rs"));
include!(concat!(env!("OUT_DIR"), "/gl_extensions.rs"));
