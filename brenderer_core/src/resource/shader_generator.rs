/// Procedural GLSL generation from shader feature flags.
///
/// Emits GLSL 1.x style stages (attribute/varying, `gl_FragColor`) so the same
/// body compiles under both the desktop and the ES version line. Uniform names
/// match the material content keys, which is how materials find their inputs.

use glam::Vec3;
use crate::resource::material::{
    MATERIAL_AMBIENT_COLOR, MATERIAL_DIFFUSE_COLOR, MATERIAL_DIFFUSE_MAP, MATERIAL_NORMAL_MAP,
    MATERIAL_SPECULAR_COLOR, MATERIAL_SPECULAR_EXPONENT, MATERIAL_SPECULAR_MAP,
    MATERIAL_TRANSPARENCY_VALUE,
};
use crate::resource::shader::{
    ATTRIBUTE_BITANGENT, ATTRIBUTE_NORMAL, ATTRIBUTE_POSITION, ATTRIBUTE_TANGENT, ATTRIBUTE_TEXCOORD,
};
use crate::resource::shader_source::{ShaderDesc, ShaderFeatures};

/// Append one formatted line to a source buffer
macro_rules! emit {
    ($src:expr, $($arg:tt)*) => {{
        $src.push_str(&format!($($arg)*));
        $src.push('\n');
    }};
}

// ===== UNIFORM NAMES =====

pub const UNIFORM_MODEL_VIEW_MATRIX: &str = "ModelViewMatrix";
pub const UNIFORM_PROJECTION_MATRIX: &str = "ProjectionMatrix";
pub const UNIFORM_NORMAL_MATRIX: &str = "NormalMatrix";
pub const UNIFORM_NUMBER_OF_LIGHTS: &str = "numLights";
pub const UNIFORM_LIGHT_POSITION: &str = "lightPositionViewSpace";
pub const UNIFORM_LIGHT_DIFFUSE_COLOR: &str = "lightDiffuseColor";
pub const UNIFORM_LIGHT_SPECULAR_COLOR: &str = "lightSpecularColor";
pub const UNIFORM_LIGHT_INTENSITY: &str = "lightIntensity";
pub const UNIFORM_LIGHT_ATTENUATION: &str = "lightAttenuation";
pub const UNIFORM_LIGHT_RADIUS: &str = "lightRadius";

/// What the generated stages need, derived once from the flags
struct Plan {
    features: ShaderFeatures,
    max_lights: u32,
}

impl Plan {
    fn new(desc: &ShaderDesc) -> Self {
        Self {
            features: desc.features,
            max_lights: desc.max_lights,
        }
    }

    fn has(&self, flag: ShaderFeatures) -> bool {
        self.features.contains(flag)
    }

    /// Per-light terms are only computed when there is a light to compute them for
    fn lit(&self) -> bool {
        self.max_lights > 0
            && self.features.intersects(ShaderFeatures::DIFFUSE_LIGHTING | ShaderFeatures::SPECULAR_LIGHTING)
    }

    fn textured(&self) -> bool {
        self.features.intersects(
            ShaderFeatures::DIFFUSE_MAP | ShaderFeatures::NORMAL_MAP | ShaderFeatures::SPECULAR_MAP,
        )
    }

    fn tangent_space(&self) -> bool {
        self.lit() && self.has(ShaderFeatures::NORMAL_MAP)
    }
}

// ===== VERTEX STAGE =====

/// Vertex stage body (no version line, no prelude)
pub fn vertex_shader(desc: &ShaderDesc) -> String {
    let plan = Plan::new(desc);
    let mut src = String::new();

    emit!(src, "uniform mat4 {};", UNIFORM_MODEL_VIEW_MATRIX);
    emit!(src, "uniform mat4 {};", UNIFORM_PROJECTION_MATRIX);
    if plan.lit() {
        emit!(src, "uniform mat3 {};", UNIFORM_NORMAL_MATRIX);
    }
    src.push('\n');

    emit!(src, "attribute vec4 {};", ATTRIBUTE_POSITION);
    emit!(src, "attribute vec3 {};", ATTRIBUTE_NORMAL);
    emit!(src, "attribute vec3 {};", ATTRIBUTE_TANGENT);
    emit!(src, "attribute vec3 {};", ATTRIBUTE_BITANGENT);
    emit!(src, "attribute vec4 {};", ATTRIBUTE_TEXCOORD);
    src.push('\n');

    src.push_str("varying vec4 posVarying;\n");
    if plan.textured() {
        src.push_str("varying vec4 texCoordVarying;\n");
    }
    if plan.tangent_space() {
        src.push_str("varying vec3 tangentVarying;\n");
        src.push_str("varying vec3 bitangentVarying;\n");
    }
    if plan.lit() {
        src.push_str("varying vec3 normalVarying;\n");
    }
    src.push('\n');

    src.push_str("void main()\n{\n");
    emit!(src, "    posVarying = {} * {};", UNIFORM_MODEL_VIEW_MATRIX, ATTRIBUTE_POSITION);
    if plan.textured() {
        emit!(src, "    texCoordVarying = {};", ATTRIBUTE_TEXCOORD);
    }
    if plan.lit() {
        emit!(src, "    normalVarying = normalize({} * {});", UNIFORM_NORMAL_MATRIX, ATTRIBUTE_NORMAL);
    }
    if plan.tangent_space() {
        emit!(src, "    tangentVarying = normalize({} * {});", UNIFORM_NORMAL_MATRIX, ATTRIBUTE_TANGENT);
        emit!(src, "    bitangentVarying = normalize({} * {});", UNIFORM_NORMAL_MATRIX, ATTRIBUTE_BITANGENT);
    }
    emit!(src, "    gl_Position = {} * posVarying;", UNIFORM_PROJECTION_MATRIX);
    src.push_str("}\n");
    src
}

// ===== FRAGMENT STAGE =====

/// Fragment stage body (no version line, no prelude)
pub fn fragment_shader(desc: &ShaderDesc, ambient_color: Vec3) -> String {
    let plan = Plan::new(desc);
    let mut src = String::new();

    src.push_str("#ifdef GL_ES\nprecision mediump float;\n#endif\n\n");
    emit!(
        src,
        "const vec3 defaultAmbientColor = vec3({:.6}, {:.6}, {:.6});",
        ambient_color.x, ambient_color.y, ambient_color.z
    );
    src.push('\n');

    write_material_uniforms(&mut src, &plan);
    if plan.lit() {
        write_light_uniforms(&mut src, &plan);
    }

    src.push_str("varying vec4 posVarying;\n");
    if plan.textured() {
        src.push_str("varying vec4 texCoordVarying;\n");
    }
    if plan.tangent_space() {
        src.push_str("varying vec3 tangentVarying;\n");
        src.push_str("varying vec3 bitangentVarying;\n");
    }
    if plan.lit() {
        src.push_str("varying vec3 normalVarying;\n");
    }
    src.push('\n');

    src.push_str("void main()\n{\n");
    write_fragment_body(&mut src, &plan);
    src.push_str("}\n");
    src
}

fn write_material_uniforms(src: &mut String, plan: &Plan) {
    if plan.has(ShaderFeatures::AMBIENT_COLOR) {
        emit!(src, "uniform vec3 {};", MATERIAL_AMBIENT_COLOR);
    }
    if plan.has(ShaderFeatures::DIFFUSE_COLOR) {
        emit!(src, "uniform vec3 {};", MATERIAL_DIFFUSE_COLOR);
    }
    if plan.has(ShaderFeatures::SPECULAR_COLOR) {
        emit!(src, "uniform vec3 {};", MATERIAL_SPECULAR_COLOR);
    }
    if plan.lit() && plan.has(ShaderFeatures::SPECULAR_LIGHTING) {
        emit!(src, "uniform float {};", MATERIAL_SPECULAR_EXPONENT);
    }
    if plan.has(ShaderFeatures::TRANSPARENCY) {
        emit!(src, "uniform float {};", MATERIAL_TRANSPARENCY_VALUE);
    }
    if plan.has(ShaderFeatures::DIFFUSE_MAP) {
        emit!(src, "uniform sampler2D {};", MATERIAL_DIFFUSE_MAP);
    }
    if plan.tangent_space() {
        emit!(src, "uniform sampler2D {};", MATERIAL_NORMAL_MAP);
    }
    if plan.lit() && plan.has(ShaderFeatures::SPECULAR_MAP) {
        emit!(src, "uniform sampler2D {};", MATERIAL_SPECULAR_MAP);
    }
    src.push('\n');
}

fn write_light_uniforms(src: &mut String, plan: &Plan) {
    if plan.has(ShaderFeatures::VARIABLE_LIGHT_COUNT) {
        emit!(src, "uniform int {};", UNIFORM_NUMBER_OF_LIGHTS);
    }
    emit!(src, "uniform vec4 {}[MAX_LIGHTS];", UNIFORM_LIGHT_POSITION);
    if plan.has(ShaderFeatures::DIFFUSE_LIGHTING) {
        emit!(src, "uniform vec3 {}[MAX_LIGHTS];", UNIFORM_LIGHT_DIFFUSE_COLOR);
    }
    if plan.has(ShaderFeatures::SPECULAR_LIGHTING) {
        emit!(src, "uniform vec3 {}[MAX_LIGHTS];", UNIFORM_LIGHT_SPECULAR_COLOR);
    }
    emit!(src, "uniform float {}[MAX_LIGHTS];", UNIFORM_LIGHT_INTENSITY);
    emit!(src, "uniform float {}[MAX_LIGHTS];", UNIFORM_LIGHT_ATTENUATION);
    emit!(src, "uniform float {}[MAX_LIGHTS];", UNIFORM_LIGHT_RADIUS);
    src.push('\n');
}

fn write_fragment_body(src: &mut String, plan: &Plan) {
    let diffuse_lit = plan.lit() && plan.has(ShaderFeatures::DIFFUSE_LIGHTING);
    let specular_lit = plan.lit() && plan.has(ShaderFeatures::SPECULAR_LIGHTING);

    // Surface base color
    if plan.has(ShaderFeatures::DIFFUSE_MAP) {
        emit!(src, "    vec4 baseColor = texture2D({}, texCoordVarying.st);", MATERIAL_DIFFUSE_MAP);
    } else {
        src.push_str("    vec4 baseColor = vec4(1.0);\n");
    }
    if plan.has(ShaderFeatures::DIFFUSE_COLOR) {
        emit!(src, "    baseColor.rgb *= {};", MATERIAL_DIFFUSE_COLOR);
    }

    // Ambient term
    src.push_str("    vec3 color = vec3(0.0);\n");
    if plan.has(ShaderFeatures::AMBIENT_LIGHTING) {
        if plan.has(ShaderFeatures::AMBIENT_COLOR) {
            emit!(src, "    color += baseColor.rgb * defaultAmbientColor * {};", MATERIAL_AMBIENT_COLOR);
        } else {
            src.push_str("    color += baseColor.rgb * defaultAmbientColor;\n");
        }
    }
    if !plan.lit() && !plan.has(ShaderFeatures::AMBIENT_LIGHTING) {
        src.push_str("    color = baseColor.rgb;\n");
    }

    if plan.lit() {
        if plan.tangent_space() {
            emit!(
                src,
                "    vec3 tangentNormal = texture2D({}, texCoordVarying.st).xyz * 2.0 - 1.0;",
                MATERIAL_NORMAL_MAP
            );
            src.push_str("    mat3 tbn = mat3(normalize(tangentVarying), normalize(bitangentVarying), normalize(normalVarying));\n");
            src.push_str("    vec3 surfaceNormal = normalize(tbn * tangentNormal);\n");
        } else {
            src.push_str("    vec3 surfaceNormal = normalize(normalVarying);\n");
        }
        src.push_str("    vec3 toEye = normalize(-posVarying.xyz);\n");

        if specular_lit {
            if plan.has(ShaderFeatures::SPECULAR_MAP) {
                emit!(src, "    vec3 specularBase = texture2D({}, texCoordVarying.st).rgb;", MATERIAL_SPECULAR_MAP);
            } else {
                src.push_str("    vec3 specularBase = vec3(1.0);\n");
            }
            if plan.has(ShaderFeatures::SPECULAR_COLOR) {
                emit!(src, "    specularBase *= {};", MATERIAL_SPECULAR_COLOR);
            }
        }

        src.push_str("    for (int i = 0; i < MAX_LIGHTS; i++)\n    {\n");
        if plan.has(ShaderFeatures::VARIABLE_LIGHT_COUNT) {
            emit!(src, "        if (i >= {}) break;", UNIFORM_NUMBER_OF_LIGHTS);
        }
        emit!(src, "        vec3 toLight = {}[i].xyz - posVarying.xyz;", UNIFORM_LIGHT_POSITION);
        src.push_str("        float distance = length(toLight);\n");
        emit!(src, "        if (distance > {}[i]) continue;", UNIFORM_LIGHT_RADIUS);
        src.push_str("        toLight = normalize(toLight);\n");
        emit!(
            src,
            "        float falloff = {}[i] / (1.0 + {}[i] * distance * distance);",
            UNIFORM_LIGHT_INTENSITY, UNIFORM_LIGHT_ATTENUATION
        );
        if diffuse_lit {
            src.push_str("        float lambert = max(dot(surfaceNormal, toLight), 0.0);\n");
            emit!(
                src,
                "        color += baseColor.rgb * {}[i] * lambert * falloff;",
                UNIFORM_LIGHT_DIFFUSE_COLOR
            );
        }
        if specular_lit {
            src.push_str("        vec3 halfVector = normalize(toLight + toEye);\n");
            emit!(
                src,
                "        float highlight = pow(max(dot(surfaceNormal, halfVector), 0.0), {});",
                MATERIAL_SPECULAR_EXPONENT
            );
            emit!(
                src,
                "        color += specularBase * {}[i] * highlight * falloff;",
                UNIFORM_LIGHT_SPECULAR_COLOR
            );
        }
        src.push_str("    }\n");
    }

    if plan.has(ShaderFeatures::TRANSPARENCY) {
        emit!(src, "    gl_FragColor = vec4(color, baseColor.a * {});", MATERIAL_TRANSPARENCY_VALUE);
    } else {
        src.push_str("    gl_FragColor = vec4(color, baseColor.a);\n");
    }
}

#[cfg(test)]
#[path = "shader_generator_tests.rs"]
mod tests;
