//! Quoll CLI
//!
//! Composes a category-checked CSS selector string from command-line
//! parts and prints it bare or wrapped in a JSON document.

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use quoll_selector::{Selector, SelectorError};
use serde::Serialize;

/// Command-line arguments.
///
/// Parts are applied in the canonical category order regardless of the
/// order the flags appear in: element, id, class, attribute,
/// pseudo-class, pseudo-element.
#[derive(Parser)]
#[command(
    name = "quoll",
    version,
    about = "Compose validated CSS selector strings",
    arg_required_else_help = true
)]
struct Args {
    /// Type selector name, e.g. `div` (a selector admits one)
    #[arg(long, value_name = "NAME")]
    element: Vec<String>,

    /// Id value, without the leading `#` (a selector admits one)
    #[arg(long, value_name = "NAME")]
    id: Vec<String>,

    /// Class value, without the leading `.`; repeatable
    #[arg(long = "class", value_name = "NAME")]
    classes: Vec<String>,

    /// Attribute expression as written between `[` and `]`,
    /// e.g. `href$=".png"`; repeatable
    #[arg(long = "attr", value_name = "EXPR")]
    attrs: Vec<String>,

    /// Pseudo-class name, without the leading `:`; repeatable
    #[arg(long = "pseudo-class", value_name = "NAME")]
    pseudo_classes: Vec<String>,

    /// Pseudo-element name, without the leading `::` (a selector admits one)
    #[arg(long = "pseudo-element", value_name = "NAME")]
    pseudo_elements: Vec<String>,

    /// Print a JSON document instead of the bare selector
    #[arg(long)]
    json: bool,

    /// Indent the JSON document; implies --json
    #[arg(long)]
    pretty: bool,
}

/// Shape of the document printed for `--json`.
#[derive(Serialize)]
struct SelectorDocument<'a> {
    selector: &'a str,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let selector = match compose(&args) {
        Ok(selector) => selector,
        Err(error) => {
            eprintln!("{} {error}", "error:".red().bold());
            std::process::exit(1);
        }
    };

    if args.json || args.pretty {
        let document = SelectorDocument {
            selector: selector.as_str(),
        };
        let text = if args.pretty {
            quoll_json::to_text_pretty(&document)?
        } else {
            quoll_json::to_text(&document)?
        };
        println!("{text}");
    } else {
        println!("{selector}");
    }

    Ok(())
}

/// Apply the parts in canonical category order.
///
/// Flag order on the command line cannot break the ordering rule, but
/// the singleton rule still can: passing `--element` twice appends two
/// type selectors back to back and surfaces the builder's error.
fn compose(args: &Args) -> Result<Selector, SelectorError> {
    let mut selector = Selector::new();
    for name in &args.element {
        selector = selector.element(name)?;
    }
    for name in &args.id {
        selector = selector.id(name)?;
    }
    for name in &args.classes {
        selector = selector.class(name)?;
    }
    for expr in &args.attrs {
        selector = selector.attr(expr)?;
    }
    for name in &args.pseudo_classes {
        selector = selector.pseudo_class(name)?;
    }
    for name in &args.pseudo_elements {
        selector = selector.pseudo_element(name)?;
    }
    Ok(selector)
}
