use clap::Parser;
use piemenu::menu::{HUB_GLYPH, LayoutPass, PieMenu, TextMetrics};
use piemenu::{Colorizer, Point, Rect, config};

/// Prints the layout a menu of the given labels would get under monospace metrics.
#[derive(Parser, Debug)]
#[command(name = "piemenu-debug-layout", version, about, long_about = None)]
struct Cli {
    /// Menu labels, clockwise from north
    #[arg(required = true)]
    labels: Vec<String>,

    #[arg(long, default_value_t = 14)]
    line_height: i32,

    /// Advance of every character
    #[arg(long, default_value_t = 7)]
    char_width: i32,

    /// Overrides the configured strategy
    #[arg(short = 'c', long)]
    colorizer: Option<Colorizer>,

    #[arg(long, default_value_t = 0)]
    center_x: i32,

    #[arg(long, default_value_t = 0)]
    center_y: i32,
}

struct Monospace {
    advance: i32,
    line_height: i32,
}

impl TextMetrics for Monospace {
    fn string_width(&self, text: &str) -> i32 {
        text.chars().count() as i32 * self.advance
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }

    fn char_width(&self, _ch: char) -> i32 {
        self.advance
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut settings = config::load_or_default();
    if let Some(colorizer) = cli.colorizer {
        settings.colorizer = colorizer;
    }

    let metrics = Monospace {
        advance: cli.char_width,
        line_height: cli.line_height,
    };
    let mut menu: PieMenu<String> = PieMenu::new(cli.labels, settings);
    menu.set_center(Point::new(cli.center_x, cli.center_y));

    let layout = match menu.layout(&metrics, Rect::default())? {
        LayoutPass::Ready(layout) => layout,
        LayoutPass::Resize(bounds) => match menu.layout(&metrics, bounds)? {
            LayoutPass::Ready(layout) => layout,
            LayoutPass::Resize(again) => {
                anyhow::bail!("bounds did not settle after one resize: {:?}", again)
            }
        },
    };

    let rings = &layout.rings;
    println!("=== {} wedges, {} colors ===", layout.wedges.len(), menu.colorizer());
    println!(
        "label box:    {} x {} (line height {}, padding {})",
        rings.label_width, rings.label_height, rings.line_height, rings.padding
    );
    println!(
        "radii:        inner {}, outer {}",
        rings.inner_radius, rings.outer_radius
    );
    println!(
        "bounds:       {}x{} at ({}, {})",
        rings.bounds.width, rings.bounds.height, rings.bounds.x, rings.bounds.y
    );
    println!(
        "hub glyph:    '{}' at ({}, {})",
        HUB_GLYPH, layout.hub_glyph.x, layout.hub_glyph.y
    );

    println!();
    for wedge in &layout.wedges {
        let hue = menu.entry(wedge.index).map(|entry| *entry.hue).unwrap_or_default();
        println!(
            "[{:>2}] {:<24} {:<10} arc {:>8.2}° + {:>6.2}°  hue {:.3}  rotate {:>6.3} anchor ({}, {})",
            wedge.index,
            format!("'{}'", wedge.label),
            wedge.quadrant.to_string(),
            wedge.wedge.start_degrees(),
            wedge.wedge.extent_degrees(),
            hue,
            wedge.placement.rotation,
            wedge.placement.anchor.x,
            wedge.placement.anchor.y
        );
    }

    Ok(())
}
