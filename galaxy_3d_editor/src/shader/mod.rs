/// Shader module - loading and compiling editor shader programs

mod shader_utils;

pub use shader_utils::{ShaderSource, ShaderUtils, MAX_POINT_LIGHTS, MAX_SPOT_LIGHTS};
