//! Kestrel CLI - build CSS selectors from the command line
//!
//! Each step is either `KIND=VALUE` or a combinator token. Steps between
//! combinators form one compound selector; compound selectors are joined
//! left to right.

use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::Parser;
use kestrel_common::warning::warn_once;
use kestrel_css::selector::{Combinator, ComponentKind, CompoundSelector, Selector, SelectorBuilder};
use serde::Serialize;

/// Kestrel — build and validate CSS selectors
#[derive(Parser, Debug)]
#[command(name = "kestrel")]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"STEPS:
    element=NAME  id=NAME  class=NAME  attr=EXPR
    pseudo-class=NAME  pseudo-element=NAME
    +  ~  >  descendant      (combinators; a quoted ' ' also works)

EXAMPLES:
    # a[href$=".png"]:focus
    kestrel element=a 'attr=href$=".png"' pseudo-class=focus

    # table#data ~ tr td
    kestrel element=table id=data '~' element=tr descendant element=td

    # Print the build as JSON
    kestrel --json id=main class=container class=editable
"#)]
struct Cli {
    /// Build steps, in order
    #[arg(value_name = "STEP", required = true, allow_hyphen_values = true)]
    steps: Vec<String>,

    /// Print the selector and its parts as JSON
    #[arg(short, long)]
    json: bool,
}

/// One command-line step.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Step {
    Component(ComponentKind, String),
    Combinator(Combinator),
}

impl FromStr for Step {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self> {
        if raw == "descendant" {
            return Ok(Self::Combinator(Combinator::Descendant));
        }
        if let Ok(combinator) = Combinator::from_symbol(raw) {
            return Ok(Self::Combinator(combinator));
        }

        let Some((kind, value)) = raw.split_once('=') else {
            bail!("expected KIND=VALUE or one of '+', '~', '>', 'descendant'");
        };
        let kind = ComponentKind::from_str(kind).map_err(|_| {
            anyhow::anyhow!(
                "unknown selector part '{kind}' (expected element, id, class, attr, \
                 pseudo-class or pseudo-element)"
            )
        })?;
        Ok(Self::Component(kind, value.to_string()))
    }
}

/// Everything built from the steps.
#[derive(Debug, Serialize)]
struct Build {
    selector: String,
    compounds: Vec<CompoundSelector>,
    combinators: Vec<Combinator>,
}

/// Warn about values that are accepted verbatim but look unintended.
fn lint_value(kind: ComponentKind, value: &str) {
    if value.is_empty() {
        warn_once(
            "CLI",
            &format!("empty value for '{kind}' renders as '{}'", kind.format("")),
        );
    } else if !kind.prefix().is_empty() && value.starts_with(kind.prefix()) {
        warn_once(
            "CLI",
            &format!(
                "value '{value}' already starts with '{}'; it renders as '{}'",
                kind.prefix(),
                kind.format(value)
            ),
        );
    }
}

/// Run the steps through the builder.
fn build(steps: &[String]) -> Result<Build> {
    let builder = SelectorBuilder::new();
    let mut compounds = Vec::new();
    let mut combinators = Vec::new();
    let mut current = CompoundSelector::new();

    for (index, raw) in steps.iter().enumerate() {
        let position = index + 1;
        let step: Step = raw
            .parse()
            .with_context(|| format!("step {position} `{raw}`"))?;

        match step {
            Step::Component(kind, value) => {
                lint_value(kind, &value);
                current = current
                    .push(kind, &value)
                    .with_context(|| format!("step {position} `{raw}`"))?;
            }
            Step::Combinator(combinator) => {
                if current.is_empty() {
                    bail!("step {position} `{raw}`: combinator has no selector on its left");
                }
                compounds.push(std::mem::take(&mut current));
                combinators.push(combinator);
            }
        }
    }

    if current.is_empty() {
        bail!("selector ends without a compound selector");
    }
    compounds.push(current);

    let Some((first, rest)) = compounds.split_first() else {
        bail!("no selector steps given");
    };
    let mut rendered: Box<dyn Selector> = Box::new(first.clone());
    for (combinator, next) in combinators.iter().zip(rest) {
        rendered = Box::new(builder.combine(&*rendered, combinator.symbol(), next)?);
    }

    Ok(Build {
        selector: builder.stringify(&*rendered),
        compounds,
        combinators,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let build = build(&cli.steps)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&build)?);
    } else {
        println!("{}", build.selector);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_component_steps() {
        assert_eq!(
            "attr=href$=\".png\"".parse::<Step>().unwrap(),
            Step::Component(ComponentKind::Attribute, "href$=\".png\"".to_string())
        );
        assert_eq!(
            "pseudoClass=focus".parse::<Step>().unwrap(),
            Step::Component(ComponentKind::PseudoClass, "focus".to_string())
        );
        assert!("universal=*".parse::<Step>().is_err());
        assert!("div".parse::<Step>().is_err());
    }

    #[test]
    fn test_parse_combinator_steps() {
        assert_eq!(
            " ".parse::<Step>().unwrap(),
            Step::Combinator(Combinator::Descendant)
        );
        assert_eq!(
            "descendant".parse::<Step>().unwrap(),
            Step::Combinator(Combinator::Descendant)
        );
        assert_eq!(
            ">".parse::<Step>().unwrap(),
            Step::Combinator(Combinator::Child)
        );
    }

    #[test]
    fn test_build_compound() {
        let build = build(&steps(&["element=a", "attr=href$=\".png\"", "pseudo-class=focus"]))
            .unwrap();
        assert_eq!(build.selector, "a[href$=\".png\"]:focus");
        assert_eq!(build.compounds.len(), 1);
        assert!(build.combinators.is_empty());
    }

    #[test]
    fn test_build_complex() {
        let build = build(&steps(&[
            "element=table",
            "id=data",
            "~",
            "element=tr",
            "descendant",
            "element=td",
        ]))
        .unwrap();
        assert_eq!(build.selector, "table#data ~ tr td");
        assert_eq!(
            build.combinators,
            vec![Combinator::SubsequentSibling, Combinator::Descendant]
        );
    }

    #[test]
    fn test_build_reports_grammar_errors() {
        let err = build(&steps(&["class=a", "element=div"])).unwrap_err();
        assert!(format!("{err:#}").contains("step 2"));
        assert!(format!("{err:#}").contains("Selector parts should be arranged"));
    }

    #[test]
    fn test_build_rejects_dangling_combinators() {
        assert!(build(&steps(&["+", "element=a"])).is_err());
        assert!(build(&steps(&["element=a", ">"])).is_err());
        assert!(build(&steps(&["element=a", ">", "+", "element=b"])).is_err());
    }

    #[test]
    fn test_build_json_shape() {
        let build = build(&steps(&["element=ul", ">", "element=li"])).unwrap();
        let json = serde_json::to_value(&build).unwrap();
        assert_eq!(json["selector"], "ul > li");
        assert_eq!(json["combinators"], serde_json::json!(["child"]));
        assert_eq!(json["compounds"][1]["history"], serde_json::json!(["element"]));
    }
}
