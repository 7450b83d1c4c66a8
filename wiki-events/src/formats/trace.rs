//! Indented, human readable event listing
//!
//! One line per event. Start events open an indented block that the
//! matching end event closes:
//!
//! ```text
//! begin document
//!   begin header level=2 id="sec1"
//!     word "Title"
//!   end header level=2
//!   macro toc
//! end document
//! ```
//!
//! Parameters are appended as `{key="value", ...}`; text payloads are
//! quoted with Rust string escaping so whitespace stays visible.

use std::fmt::Write;

use crate::error::ConvertError;
use crate::format::EventFormat;
use crate::ir::attributes::Attributes;
use crate::ir::events::{Event, Nesting};

const INDENT: &str = "  ";

pub struct TraceFormat;

impl EventFormat for TraceFormat {
    fn name(&self) -> &str {
        "trace"
    }

    fn description(&self) -> &str {
        "Indented listing of begin/end and single events"
    }

    fn write(&self, events: &[Event]) -> Result<String, ConvertError> {
        let mut out = String::new();
        let mut depth = 0usize;

        for event in events {
            let head = match event.nesting() {
                Nesting::Open(name) => format!("begin {name}"),
                Nesting::Close(name) => {
                    depth = depth.saturating_sub(1);
                    format!("end {name}")
                }
                Nesting::Single => single_name(event).to_string(),
            };
            writeln!(
                out,
                "{}{}{}",
                INDENT.repeat(depth),
                head,
                details(event)?
            )?;
            if let Nesting::Open(_) = event.nesting() {
                depth += 1;
            }
        }

        Ok(out)
    }
}

fn single_name(event: &Event) -> &'static str {
    match event {
        Event::Unknown { .. } => "unknown",
        Event::Image { .. } => "image",
        Event::Verbatim { .. } => "verbatim",
        Event::Macro { .. } => "macro",
        Event::NewLine => "new_line",
        Event::HorizontalLine { .. } => "horizontal_line",
        Event::Word { .. } => "word",
        Event::Space => "space",
        Event::SpecialSymbol { .. } => "symbol",
        _ => "event",
    }
}

fn details(event: &Event) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    match event {
        Event::StartHeader {
            level,
            id,
            parameters,
        } => {
            write!(out, " level={level}")?;
            if let Some(id) = id {
                write!(out, " id={id:?}")?;
            }
            write_parameters(&mut out, parameters)?;
        }
        Event::EndHeader { level } => write!(out, " level={level}")?,
        Event::StartList { kind, parameters } => {
            write!(out, " {}", kind.name())?;
            write_parameters(&mut out, parameters)?;
        }
        Event::EndList { kind } => write!(out, " {}", kind.name())?,
        Event::StartFormat { format, parameters } => {
            write!(out, " {}", format.name())?;
            write_parameters(&mut out, parameters)?;
        }
        Event::EndFormat { format } => write!(out, " {}", format.name())?,
        Event::StartLink {
            reference,
            freestanding,
            parameters,
        }
        | Event::Image {
            reference,
            freestanding,
            parameters,
        } => {
            write!(out, " {reference}")?;
            if *freestanding {
                out.push_str(" freestanding");
            }
            write_parameters(&mut out, parameters)?;
        }
        Event::StartUnknown { id, parameters } | Event::Unknown { id, parameters } => {
            write!(out, " {id}")?;
            write_parameters(&mut out, parameters)?;
        }
        Event::EndUnknown { id } => write!(out, " {id}")?,
        Event::Verbatim {
            content,
            inline,
            parameters,
        } => {
            if *inline {
                out.push_str(" inline");
            }
            write_parameters(&mut out, parameters)?;
            write!(out, " {content:?}")?;
        }
        Event::Macro {
            id,
            parameters,
            content,
            inline,
        } => {
            write!(out, " {id}")?;
            if *inline {
                out.push_str(" inline");
            }
            write_parameters(&mut out, parameters)?;
            if let Some(content) = content {
                write!(out, " content={content:?}")?;
            }
        }
        Event::Word { text } => write!(out, " {text:?}")?,
        Event::SpecialSymbol { symbol } => write!(out, " {symbol:?}")?,
        Event::StartParagraph { parameters }
        | Event::StartListItem { parameters }
        | Event::StartDefinitionList { parameters }
        | Event::StartTable { parameters }
        | Event::StartTableRow { parameters }
        | Event::StartTableCell { parameters }
        | Event::StartTableHeadCell { parameters }
        | Event::StartGroup { parameters }
        | Event::StartFigure { parameters }
        | Event::HorizontalLine { parameters } => write_parameters(&mut out, parameters)?,
        _ => {}
    }
    Ok(out)
}

fn write_parameters(out: &mut String, parameters: &Attributes) -> std::fmt::Result {
    if parameters.is_empty() {
        return Ok(());
    }
    out.push_str(" {");
    for (index, (key, value)) in parameters.iter().enumerate() {
        if index > 0 {
            out.push_str(", ");
        }
        write!(out, "{key}={value:?}")?;
    }
    out.push('}');
    Ok(())
}
