/// Point light parameters.

use glam::Vec3;

/// Light creation descriptor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightDesc {
    pub position: Vec3,
    pub diffuse_color: Vec3,
    pub specular_color: Vec3,
    pub intensity: f32,
    pub attenuation: f32,
    pub radius: f32,
}

impl Default for LightDesc {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            diffuse_color: Vec3::ONE,
            specular_color: Vec3::ONE,
            intensity: 100.0,
            attenuation: 1.0,
            radius: 100.0,
        }
    }
}

impl LightDesc {
    /// Same color for diffuse and specular, default falloff
    pub fn colored(position: Vec3, color: Vec3) -> Self {
        Self { position, diffuse_color: color, specular_color: color, ..Self::default() }
    }

    /// Same color for diffuse and specular, explicit falloff
    pub fn with_falloff(position: Vec3, color: Vec3, intensity: f32, attenuation: f32, radius: f32) -> Self {
        Self { position, diffuse_color: color, specular_color: color, intensity, attenuation, radius }
    }

    /// Fully specified light
    pub fn new(
        position: Vec3,
        diffuse_color: Vec3,
        specular_color: Vec3,
        intensity: f32,
        attenuation: f32,
        radius: f32,
    ) -> Self {
        Self { position, diffuse_color, specular_color, intensity, attenuation, radius }
    }
}

/// Light resource
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    desc: LightDesc,
}

impl Light {
    pub fn from_desc(desc: LightDesc) -> Self {
        Self { desc }
    }

    pub fn position(&self) -> Vec3 {
        self.desc.position
    }

    pub fn diffuse_color(&self) -> Vec3 {
        self.desc.diffuse_color
    }

    pub fn specular_color(&self) -> Vec3 {
        self.desc.specular_color
    }

    pub fn intensity(&self) -> f32 {
        self.desc.intensity
    }

    pub fn attenuation(&self) -> f32 {
        self.desc.attenuation
    }

    pub fn radius(&self) -> f32 {
        self.desc.radius
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.desc.position = position;
    }

    /// Set diffuse and specular color together
    pub fn set_color(&mut self, color: Vec3) {
        self.desc.diffuse_color = color;
        self.desc.specular_color = color;
    }

    pub fn set_diffuse_color(&mut self, color: Vec3) {
        self.desc.diffuse_color = color;
    }

    pub fn set_specular_color(&mut self, color: Vec3) {
        self.desc.specular_color = color;
    }

    pub fn set_intensity(&mut self, intensity: f32) {
        self.desc.intensity = intensity;
    }

    pub fn set_attenuation(&mut self, attenuation: f32) {
        self.desc.attenuation = attenuation;
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.desc.radius = radius;
    }
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
