//! Command-line interface for galley
//! Renders rich-text content (Tiptap JSON or HTML) into a LaTeX template,
//! optionally compiling the result to PDF with pdflatex.
//!
//! Usage:
//!   galley `<content>` --template `<file.tex>` [--from `<format>`] [--output `<file>`] [--pdf `<file>`]
//!   galley --list-formats

use clap::{Arg, ArgAction, Command};
use galley::publish::{render, sections_from_json, RenderArtifact, RenderInput, RenderSpec};
use galley::{engine, FormatRegistry};
use std::fs;
use std::path::PathBuf;

fn main() {
    let matches = Command::new("galley")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render rich-text content into a LaTeX template")
        .arg_required_else_help(true)
        .arg(
            Arg::new("content")
                .help("Path to the content file (Tiptap JSON or HTML)")
                .required_unless_present("list-formats")
                .index(1),
        )
        .arg(
            Arg::new("template")
                .long("template")
                .short('t')
                .help("Path to the LaTeX template")
                .required_unless_present("list-formats"),
        )
        .arg(
            Arg::new("from")
                .long("from")
                .short('f')
                .help("Input format ('tiptap' or 'html')")
                .default_value("tiptap"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the composed LaTeX to this path instead of stdout"),
        )
        .arg(
            Arg::new("pdf")
                .long("pdf")
                .help("Compile the composed LaTeX with pdflatex and write the PDF here"),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available content formats")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-formats") {
        handle_list_formats();
        return;
    }

    let content_path = matches
        .get_one::<String>("content")
        .expect("content is required unless listing formats");
    let template_path = matches
        .get_one::<String>("template")
        .expect("template is required unless listing formats");
    let from = matches.get_one::<String>("from").unwrap();
    let output = matches.get_one::<String>("output").map(PathBuf::from);
    let pdf = matches.get_one::<String>("pdf").map(PathBuf::from);

    handle_render(content_path, template_path, from, output, pdf);
}

fn handle_list_formats() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:");
    for name in registry.list_formats() {
        let format = registry
            .get(&name)
            .expect("listed formats are registered");
        println!("  {} - {}", name, format.description());
    }
}

fn handle_render(
    content_path: &str,
    template_path: &str,
    from: &str,
    output: Option<PathBuf>,
    pdf: Option<PathBuf>,
) {
    let source = read_or_exit(content_path);
    let template = read_or_exit(template_path);

    let input = match from {
        "tiptap" => {
            let sections = sections_from_json(&source).unwrap_or_else(|e| {
                eprintln!("Content error: {}", e);
                std::process::exit(1);
            });
            RenderInput::Sections(sections)
        }
        "html" => RenderInput::Markup(source),
        other => {
            eprintln!("Unknown input format '{}'", other);
            eprintln!("Available input formats: tiptap, html");
            std::process::exit(1);
        }
    };

    let mut spec = RenderSpec::new(&template, input);
    if let Some(path) = &output {
        spec = spec.with_output_path(path);
    }

    let result = render(spec).unwrap_or_else(|e| {
        eprintln!("Render error: {}", e);
        std::process::exit(1);
    });

    let composed = match &result.artifact {
        RenderArtifact::InMemory(text) => text.clone(),
        RenderArtifact::File(path) => {
            eprintln!("Wrote {}", path.display());
            read_or_exit(&path.display().to_string())
        }
    };

    if let Some(pdf_path) = pdf {
        let typeset = engine::typeset(&composed).unwrap_or_else(|e| {
            eprintln!("Typesetting error: {}", e);
            std::process::exit(1);
        });
        if let Err(e) = fs::write(&pdf_path, typeset.pdf) {
            eprintln!("Error writing {}: {}", pdf_path.display(), e);
            std::process::exit(1);
        }
        eprintln!("Wrote {}", pdf_path.display());
    } else if output.is_none() {
        print!("{}", composed);
    }
}

fn read_or_exit(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        std::process::exit(1);
    })
}
