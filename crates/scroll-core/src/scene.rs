use crate::config::{ConfigError, SceneConfig};

/// Everything one section contributes to the composition: its overlay copy,
/// the color of its 3D object, the page background it installs when its
/// overlay scrolls into view, and its world-space anchor.
#[derive(Clone, Debug)]
pub struct SectionParams {
    pub title: &'static str,
    pub model_color: &'static str,
    pub background: &'static str,
    pub anchor_y: f32,
}

/// Parameterization of the whole page. The two shipped page variants differ
/// only in `interactive` (click-to-scale on overlay panels), so they are one
/// composition with two configurations rather than two code paths.
#[derive(Clone, Debug)]
pub struct SceneParams {
    pub config: SceneConfig,
    pub sections: Vec<SectionParams>,
    pub interactive: bool,
}

impl SceneParams {
    /// The default three-section landing page.
    pub fn landing() -> Result<Self, ConfigError> {
        let sections = vec![
            SectionParams {
                title: "Test 1",
                model_color: "#636567",
                background: "#f15946",
                anchor_y: 250.0,
            },
            SectionParams {
                title: "Test 2",
                model_color: "#f15946",
                background: "#571ec1",
                anchor_y: 0.0,
            },
            SectionParams {
                title: "Test 3",
                model_color: "#571ec1",
                background: "#636567",
                anchor_y: -250.0,
            },
        ];
        let config = SceneConfig::new(sections.len() as u32, 3, 1.0)?;
        Ok(Self {
            config,
            sections,
            interactive: true,
        })
    }
}

/// Parse a `#rrggbb` color into linear-ish [0, 1] components. Anything that
/// does not parse falls back to white so a bad palette entry stays visible.
pub fn hex_to_rgb(hex: &str) -> [f32; 3] {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return [1.0, 1.0, 1.0];
    }
    let mut out = [1.0_f32; 3];
    for (i, slot) in out.iter_mut().enumerate() {
        match u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16) {
            Ok(v) => *slot = v as f32 / 255.0,
            Err(_) => return [1.0, 1.0, 1.0],
        }
    }
    out
}
