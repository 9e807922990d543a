//! Headless lookup - one fetch, rendered as plain text

use crate::presenter::InfoPanel;
use pokeinfo_common::PokemonSource;

/// Width of the `#` bars in text output
pub const TEXT_BAR_WIDTH: usize = 20;

/// Fetch `name` into `panel`. Returns true on success.
pub async fn run_lookup(source: &dyn PokemonSource, name: &str, panel: &mut InfoPanel) -> bool {
    let result = source.fetch(name).await;
    panel.render(&result, name);
    result.is_ok()
}

/// Lookup and print: panel to stdout, failure notice to stderr
pub async fn print_lookup(source: &dyn PokemonSource, name: &str, panel: &mut InfoPanel) -> bool {
    let ok = run_lookup(source, name, panel).await;
    if let Some(notice) = &panel.notice {
        eprintln!("Error: {}", notice);
    }
    print!("{}", panel.to_text(TEXT_BAR_WIDTH));
    ok
}
