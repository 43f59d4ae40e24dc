use crate::error::{CliError, CliResult};
use crate::output;
use sssom_align::graph;
use sssom_align::review::{annotate, load_axiom_mappings, AxiomMapping, Decision, Review};
use std::io::{self, BufRead, Write};
use std::path::Path;

type InputLines<'a> = &'a mut dyn Iterator<Item = io::Result<String>>;

/// Review the mappings of an SSSOM alignment set.
///
/// Walks every `owl:Axiom` mapping, prompts for a decision and a
/// justification, and writes the annotated graph to
/// `<out_dir>/<stem>_<reviewer-name>.ttl`. With `list` set, the mappings are
/// printed as a table and nothing is written.
pub fn run(
    alignments: &Path,
    reviewer_id: Option<String>,
    reviewer_name: Option<String>,
    out_dir: &Path,
    list: bool,
) -> CliResult<()> {
    let store = graph::parse_turtle_file(alignments)?;
    let mappings = load_axiom_mappings(&store)?;

    if list {
        println!("{}", output::mapping_table(&mappings));
        println!("{} mappings", mappings.len());
        return Ok(());
    }

    if mappings.is_empty() {
        println!("No SSSOM mappings found in {}", alignments.display());
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let reviewer_id = match reviewer_id {
        Some(id) => id,
        None => prompt_reviewer_id(&mut lines)?,
    };
    let reviewer_name = match reviewer_name {
        Some(name) => name,
        None => prompt(&mut lines, "Enter your name: ")?,
    };

    println!("Loaded {} SSSOM alignments", mappings.len());
    println!();
    println!("====================== BEGINNING REVIEW ======================");
    println!();

    for (index, mapping) in mappings.iter().enumerate() {
        println!("Alignment {} of {}", index + 1, mappings.len());
        println!();
        print_mapping(mapping);

        let (decision, justification) = prompt_decision(&mut lines)?;
        let review = Review {
            reviewer_id: reviewer_id.clone(),
            reviewer_label: reviewer_name.clone(),
            decision,
            justification,
        };
        annotate(&store, mapping.axiom.as_ref(), &review)?;

        println!();
        println!("==============================================================");
        println!();
    }
    println!("====================== REVIEW COMPLETE =======================");

    let stem = alignments
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let out_path = out_dir.join(format!("{stem}_{}.ttl", file_safe(&reviewer_name)));
    graph::write_turtle_file(&store, &out_path)?;
    println!("Wrote {}", out_path.display());
    Ok(())
}

fn print_mapping(mapping: &AxiomMapping) {
    println!("  subject:    {}", mapping.subject_id);
    println!(
        "  predicate:  {}",
        mapping.predicate_id.as_deref().unwrap_or("-")
    );
    println!("  object:     {}", mapping.object_id);
    if let Some(confidence) = mapping.confidence {
        println!("  confidence: {confidence}");
    }
    if let Some(rule) = &mapping.curation_rule {
        println!("  rule:       {rule}");
    }
    println!();
}

fn prompt(lines: InputLines<'_>, message: &str) -> CliResult<String> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(line?.trim().to_string()),
        None => Err(CliError::Input("unexpected end of input".to_string())),
    }
}

fn prompt_decision(lines: InputLines<'_>) -> CliResult<(Decision, String)> {
    let decision = loop {
        let answer = prompt(
            lines,
            "Is the above mapping acceptable? Yes(y), No(n), Needs Refinement(r): ",
        )?;
        match answer.as_str() {
            "y" | "Y" => break Decision::Accept,
            "n" | "N" => break Decision::Reject,
            "r" | "R" => break Decision::RequiresRefinement,
            "" => break Decision::Unspecified,
            _ => println!("Unrecognized answer '{answer}'."),
        }
    };
    let justification = prompt(lines, "Provide a justification for your decision: ")?;
    Ok((decision, justification))
}

fn prompt_reviewer_id(lines: InputLines<'_>) -> CliResult<String> {
    loop {
        let answer = prompt(lines, "Are you using an ORCID as your id? Y/n (type h for help): ")?;
        match answer.as_str() {
            "h" | "H" => println!(
                "Used to identify the person that reviewed and confirmed the mapping. \
                 Recommended to be an ORCID or otherwise identifying IRI."
            ),
            "" | "y" | "Y" => {
                let orcid = prompt(lines, "Enter your ORCID: ")?;
                return Ok(format!("orcid:{orcid}"));
            }
            _ => return prompt(lines, "Enter your IRI (include namespace or prefix): "),
        }
    }
}

/// Reviewer names end up in the output file name; keep them path-friendly.
fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_whitespace() || c == '/' { '-' } else { c })
        .collect()
}
