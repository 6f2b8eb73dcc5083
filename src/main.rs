//! galley - Markdown to attributed text renderer

use std::fs;
use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use url::Url;

use galley::style::FontFamily;
use galley::{render_document, AttributedText, Document, RenderEnvironment, StyleSheet};

#[derive(Parser)]
#[command(name = "galley")]
#[command(version, about = "Renders Markdown into attributed text runs", long_about = None)]
#[command(after_help = "EXAMPLES:
    galley README.md                                  Show rendered runs
    galley --base-url https://example.com/ page.md    Resolve relative links
    galley --json page.md                             Emit runs as JSON")]
struct Cli {
    /// Input Markdown file
    #[arg(value_name = "INPUT")]
    input: String,

    /// Base URL for resolving relative link and image destinations
    #[arg(short, long, value_name = "URL")]
    base_url: Option<String>,

    /// Emit the rendered runs as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let source = fs::read_to_string(&cli.input).map_err(|e| format!("{}: {e}", cli.input))?;
    let document = Document::from_markdown(&source);

    let mut environment = RenderEnvironment::new();
    if let Some(ref base) = cli.base_url {
        let base = Url::parse(base).map_err(|e| format!("invalid base URL {base:?}: {e}"))?;
        environment.base_url = Some(base);
    }

    let text = render_document(&document, &StyleSheet::default(), &environment)
        .map_err(|e| e.to_string())?;

    if cli.json {
        print_json(&text)
    } else {
        print_runs(&text);
        Ok(())
    }
}

fn print_runs(text: &AttributedText) {
    for run in text.runs() {
        let font = &run.attrs.font;
        let mut traits = Vec::new();
        if font.is_bold() {
            traits.push("bold");
        }
        if font.is_italic() {
            traits.push("italic");
        }
        if font.is_monospace() {
            traits.push("mono");
        }

        let mut line = format!("{:?} {}pt", run.text, font.size);
        if !traits.is_empty() {
            line.push_str(&format!(" [{}]", traits.join(", ")));
        }
        if let Some(ref link) = run.attrs.link {
            line.push_str(&format!(" -> {}", link.url));
        }
        if let Some(ref attachment) = run.attrs.attachment {
            line.push_str(&format!(" [image {attachment}]"));
        }
        println!("{line}");
    }
}

// Serialization lives here rather than in the library so the rendered types
// stay free of serde.

#[derive(Serialize)]
struct RunDto<'a> {
    text: &'a str,
    font: FontDto,
    /// RGBA channels.
    color: [u8; 4],
    #[serde(skip_serializing_if = "Option::is_none")]
    link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attachment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paragraph: Option<ParagraphDto>,
}

#[derive(Serialize)]
struct FontDto {
    family: String,
    size: f32,
    bold: bool,
    italic: bool,
}

#[derive(Serialize)]
struct ParagraphDto {
    paragraph_spacing: f32,
    head_indent: f32,
    tail_indent: f32,
    tab_stops: Vec<f32>,
}

fn print_json(text: &AttributedText) -> Result<(), String> {
    let runs: Vec<RunDto> = text
        .runs()
        .iter()
        .map(|run| RunDto {
            text: &run.text,
            font: FontDto {
                family: family_name(&run.attrs.font.family),
                size: run.attrs.font.size,
                bold: run.attrs.font.is_bold(),
                italic: run.attrs.font.is_italic(),
            },
            color: [
                run.attrs.color.r,
                run.attrs.color.g,
                run.attrs.color.b,
                run.attrs.color.a,
            ],
            link: run.attrs.link.as_ref().map(|link| link.url.to_string()),
            attachment: run.attrs.attachment.as_ref().map(|url| url.to_string()),
            paragraph: run.attrs.paragraph.as_ref().map(|style| ParagraphDto {
                paragraph_spacing: style.paragraph_spacing,
                head_indent: style.head_indent,
                tail_indent: style.tail_indent,
                tab_stops: style.tab_stops.iter().map(|stop| stop.location).collect(),
            }),
        })
        .collect();

    let json = serde_json::to_string_pretty(&runs).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn family_name(family: &FontFamily) -> String {
    match family {
        FontFamily::SansSerif => "sans-serif".into(),
        FontFamily::Serif => "serif".into(),
        FontFamily::Monospace => "monospace".into(),
        FontFamily::Named(name) => name.clone(),
    }
}
