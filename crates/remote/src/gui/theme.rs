use crate::config::ThemeConfig;
use gtk::gdk;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub background: Srgba<f64>,
    pub wedge: Srgba<f64>,
    pub wedge_selected: Srgba<f64>,
    pub glyph: Srgba<f64>,
    pub glyph_selected: Srgba<f64>,
    pub knob: Srgba<f64>,
    pub knob_selected: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_config(theme: &ThemeConfig) -> Self {
        Self {
            background: theme.background.to_srgba(),
            wedge: theme.wedge.to_srgba(),
            wedge_selected: theme.wedge_selected.to_srgba(),
            glyph: theme.glyph.to_srgba(),
            glyph_selected: theme.glyph_selected.to_srgba(),
            knob: theme.knob.to_srgba(),
            knob_selected: theme.knob_selected.to_srgba(),
        }
    }

    /// Ring and glyph colors for a wedge.
    pub fn wedge_colors(&self, selected: bool) -> (Srgba<f64>, Srgba<f64>) {
        if selected {
            (self.wedge_selected, self.glyph_selected)
        } else {
            (self.wedge, self.glyph)
        }
    }

    pub fn knob_color(&self, dragging: bool) -> Srgba<f64> {
        if dragging {
            self.knob_selected
        } else {
            self.knob
        }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.remote-pad {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HexColor;

    #[test]
    fn test_selected_colors_swap() {
        let theme = ThemeConfig {
            wedge: HexColor::rgb(0, 0, 0),
            wedge_selected: HexColor::rgb(255, 255, 255),
            ..Default::default()
        };
        let colors = ThemeColors::from_config(&theme);

        let (ring, _) = colors.wedge_colors(true);
        assert_eq!(ring, Srgba::new(1.0, 1.0, 1.0, 1.0));
        let (ring, _) = colors.wedge_colors(false);
        assert_eq!(ring, Srgba::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(colors.knob_color(true), colors.knob_selected);
    }
}
