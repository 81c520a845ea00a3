//! Example cycling through every built-in style by selector index
//!
//! This example showcases:
//! - Loading themes by selector index (0 = library default)
//! - Reading back the values a renderer would draw with
//! - Layering a user style file on top (pass a `.rgs` or `.toml` path)

use gui_style_engine::style::{ControlProperty, GuiControl};
use gui_style_engine::{StyleConfig, StyleContext, ThemeId};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut context = StyleContext::new(StyleConfig::default())?;

    for index in 0..=ThemeId::ALL.len() as u32 {
        let name = match ThemeId::from_index(index) {
            Some(id) => {
                context.load_theme(id)?;
                id.name()
            }
            None => {
                context.load_default();
                "default"
            }
        };

        let table = context.table();
        println!(
            "{:>2} {:<10} background {}  button {}  font {} ({}px)",
            index,
            name,
            table.background_color(),
            table.color(GuiControl::Button, ControlProperty::BaseColorNormal),
            table.font().name,
            table.font().base_size,
        );
    }

    if let Some(path) = std::env::args().nth(1) {
        context.load_style_file(&path)?;
        println!("\nafter {}:\n{}", path, context.export_rgs());
    }

    Ok(())
}
