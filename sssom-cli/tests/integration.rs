use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use oxigraph::io::RdfFormat;
use oxigraph::model::{NamedNode, Term};
use oxigraph::store::Store;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper to create an `sssom` command that runs in an isolated temp
/// directory with color disabled.
fn sssom_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("sssom");
    cmd.current_dir(work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd
}

const ALIGNMENT_TTL: &str = r#"
@prefix align: <http://knowledgeweb.semanticweb.org/heterogeneity/alignment#> .
@prefix ex: <http://example.org/> .

ex:aln a align:Alignment ;
    align:onto1 <http://a/> ;
    align:onto2 <http://b/> ;
    align:map ex:cell1 .

ex:cell1 a align:Cell ;
    align:entity1 <http://a/x> ;
    align:entity2 <http://b/y> ;
    align:relation "=" ;
    align:measure "0.95" ;
    ex:cid "1" .
"#;

const NO_CID_TTL: &str = r#"
@prefix align: <http://knowledgeweb.semanticweb.org/heterogeneity/alignment#> .
@prefix ex: <http://example.org/> .

ex:aln a align:Alignment ;
    align:onto1 <http://a/> ;
    align:onto2 <http://b/> ;
    align:map ex:cell1 .

ex:cell1 a align:Cell ;
    align:entity1 <http://a/x> ;
    align:entity2 <http://b/y> ;
    align:relation "=" ;
    align:measure "0.95" .
"#;

const AXIOM_SET_TTL: &str = r#"
@prefix owl: <http://www.w3.org/2002/07/owl#> .
@prefix skos: <http://www.w3.org/2004/02/skos/core#> .
@prefix sssom: <https://w3id.org/sssom/> .
@prefix ex: <http://example.org/> .

ex:ax1 a owl:Axiom ;
    sssom:subject_id <http://a/x> ;
    sssom:object_id <http://b/y> ;
    sssom:predicate_id skos:exactMatch ;
    sssom:confidence "0.95"^^<http://www.w3.org/2001/XMLSchema#double> .

ex:ax2 a owl:Axiom ;
    sssom:subject_id <http://a/z> ;
    sssom:object_id <http://b/w> .
"#;

const RDFXML: &str = r#"<?xml version="1.0"?>
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
         xmlns:ex="http://example.org/">
  <rdf:Description rdf:about="http://example.org/a">
    <ex:p rdf:resource="http://example.org/b"/>
  </rdf:Description>
</rdf:RDF>
"#;

fn load_turtle(path: &Path) -> Store {
    let bytes = fs::read(path).unwrap();
    let store = Store::new().unwrap();
    store
        .load_from_reader(RdfFormat::Turtle, bytes.as_slice())
        .unwrap();
    store
}

fn has_iri_triple(store: &Store, subject: &str, predicate: &str, object: &str) -> bool {
    let subject = NamedNode::new(subject).unwrap();
    let predicate = NamedNode::new(predicate).unwrap();
    let object = NamedNode::new(object).unwrap();
    store
        .quads_for_pattern(
            Some(subject.as_ref().into()),
            Some(predicate.as_ref()),
            Some(object.as_ref().into()),
            None,
        )
        .next()
        .is_some()
}

fn objects_of(store: &Store, predicate: &str) -> Vec<Term> {
    let predicate = NamedNode::new(predicate).unwrap();
    store
        .quads_for_pattern(None, Some(predicate.as_ref()), None, None)
        .filter_map(|quad| quad.ok())
        .map(|quad| quad.object)
        .collect()
}

// ============================================================================
// CLI surface
// ============================================================================

#[test]
fn version_flag() {
    cargo_bin_cmd!("sssom")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sssom"));
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("sssom")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("SSSOM alignment curation toolkit"))
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("review"))
        .stdout(predicate::str::contains("match"))
        .stdout(predicate::str::contains("to-turtle"));
}

#[test]
fn verbose_quiet_conflict() {
    let tmp = TempDir::new().unwrap();
    sssom_cmd(&tmp)
        .args(["--verbose", "--quiet", "convert", "."])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

// ============================================================================
// convert
// ============================================================================

#[test]
fn convert_rejects_missing_directory() {
    let tmp = TempDir::new().unwrap();
    sssom_cmd(&tmp)
        .args(["convert", "does-not-exist"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn convert_writes_sssom_mapping_set() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("in")).unwrap();
    fs::write(tmp.path().join("in/anatomy.ttl"), ALIGNMENT_TTL).unwrap();

    sssom_cmd(&tmp)
        .args(["convert", "in", "--out-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing"));

    let out_path = tmp.path().join("out/anatomy_sssom.ttl");
    assert!(out_path.is_file());

    let store = load_turtle(&out_path);
    let set = "http://example.org/mappings/anatomy";
    let mapping = "http://example.org/mappings/anatomy#m1";

    assert!(has_iri_triple(
        &store,
        set,
        sssom_vocab::rdf::TYPE,
        sssom_vocab::owl::ONTOLOGY
    ));
    assert!(has_iri_triple(
        &store,
        set,
        sssom_vocab::rdf::TYPE,
        sssom_vocab::sssom::MAPPING_SET
    ));
    assert!(has_iri_triple(
        &store,
        set,
        sssom_vocab::sssom::MAPPINGS,
        mapping
    ));
    assert!(has_iri_triple(
        &store,
        set,
        sssom_vocab::sssom::SUBJECT_SOURCE,
        "http://a/"
    ));
    assert!(has_iri_triple(
        &store,
        set,
        sssom_vocab::sssom::OBJECT_SOURCE,
        "http://b/"
    ));
    assert!(has_iri_triple(
        &store,
        mapping,
        sssom_vocab::rdf::TYPE,
        sssom_vocab::sssom::MAPPING
    ));
    assert!(has_iri_triple(
        &store,
        mapping,
        sssom_vocab::sssom::SUBJECT_ID,
        "http://a/x"
    ));
    assert!(has_iri_triple(
        &store,
        mapping,
        sssom_vocab::sssom::OBJECT_ID,
        "http://b/y"
    ));
    assert!(has_iri_triple(
        &store,
        mapping,
        sssom_vocab::sssom::PREDICATE_ID,
        sssom_vocab::skos::EXACT_MATCH
    ));
    assert!(has_iri_triple(
        &store,
        mapping,
        sssom_vocab::sssom::MAPPING_JUSTIFICATION,
        sssom_vocab::semapv::UNSPECIFIED_MATCHING
    ));

    // confidence is an xsd:double literal
    let confidences = objects_of(&store, sssom_vocab::sssom::CONFIDENCE);
    assert_eq!(confidences.len(), 1);
    match &confidences[0] {
        Term::Literal(literal) => {
            assert_eq!(literal.value(), "0.95");
            assert_eq!(literal.datatype().as_str(), sssom_vocab::xsd::DOUBLE);
        }
        other => panic!("expected a literal confidence, got {other}"),
    }
}

#[test]
fn convert_defaults_out_dir_to_input() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("in")).unwrap();
    fs::write(tmp.path().join("in/a.ttl"), ALIGNMENT_TTL).unwrap();

    sssom_cmd(&tmp).args(["convert", "in"]).assert().success();

    assert!(tmp.path().join("in/a_sssom.ttl").is_file());
}

#[test]
fn convert_non_equal_relation_becomes_related_match() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("in")).unwrap();
    let near = ALIGNMENT_TTL.replace(r#"align:relation "=""#, r#"align:relation "near""#);
    fs::write(tmp.path().join("in/a.ttl"), near).unwrap();

    sssom_cmd(&tmp).args(["convert", "in"]).assert().success();

    let store = load_turtle(&tmp.path().join("in/a_sssom.ttl"));
    assert!(has_iri_triple(
        &store,
        "http://example.org/mappings/a#m1",
        sssom_vocab::sssom::PREDICATE_ID,
        sssom_vocab::skos::RELATED_MATCH
    ));
}

#[test]
fn convert_non_numeric_measure_omits_confidence() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("in")).unwrap();
    let bad = ALIGNMENT_TTL.replace(r#"align:measure "0.95""#, r#"align:measure "not-a-number""#);
    fs::write(tmp.path().join("in/a.ttl"), bad).unwrap();

    sssom_cmd(&tmp).args(["convert", "in"]).assert().success();

    let store = load_turtle(&tmp.path().join("in/a_sssom.ttl"));
    assert!(objects_of(&store, sssom_vocab::sssom::CONFIDENCE).is_empty());
    // the mapping itself is still emitted
    assert!(has_iri_triple(
        &store,
        "http://example.org/mappings/a#m1",
        sssom_vocab::rdf::TYPE,
        sssom_vocab::sssom::MAPPING
    ));
}

#[test]
fn convert_missing_roles_warns_and_skips() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("in")).unwrap();
    let incomplete = r#"
@prefix align: <http://example.org/align#> .
<http://example.org/aln> a align:Alignment ;
    align:onto1 <http://a/> ;
    align:onto2 <http://b/> .
"#;
    fs::write(tmp.path().join("in/a.ttl"), incomplete).unwrap();

    sssom_cmd(&tmp)
        .args(["convert", "in"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("measure"))
        .stderr(predicate::str::contains("entity1"));

    assert!(!tmp.path().join("in/a_sssom.ttl").exists());
}

#[test]
fn convert_continues_past_malformed_file() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("in")).unwrap();
    fs::write(tmp.path().join("in/a_bad.ttl"), "this is not turtle").unwrap();
    fs::write(tmp.path().join("in/b_good.ttl"), ALIGNMENT_TTL).unwrap();

    sssom_cmd(&tmp)
        .args(["convert", "in", "--out-dir", "out"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"));

    assert!(!tmp.path().join("out/a_bad_sssom.ttl").exists());
    assert!(tmp.path().join("out/b_good_sssom.ttl").is_file());
}

#[test]
fn convert_fallback_mapping_id_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("in")).unwrap();
    fs::write(tmp.path().join("in/a.ttl"), NO_CID_TTL).unwrap();

    sssom_cmd(&tmp)
        .args(["convert", "in", "--out-dir", "out1"])
        .assert()
        .success();
    sssom_cmd(&tmp)
        .args(["convert", "in", "--out-dir", "out2"])
        .assert()
        .success();

    let ids = |path: &Path| -> Vec<String> {
        let store = load_turtle(path);
        let mut out: Vec<String> = objects_of(&store, sssom_vocab::sssom::MAPPINGS)
            .iter()
            .map(|term| term.to_string())
            .collect();
        out.sort();
        out
    };
    let first = ids(&tmp.path().join("out1/a_sssom.ttl"));
    let second = ids(&tmp.path().join("out2/a_sssom.ttl"));
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);

    // <set>#m + 16 hex chars
    let iri = first[0].trim_matches(|c| c == '<' || c == '>');
    let fragment = iri.rsplit("#m").next().unwrap();
    assert_eq!(fragment.len(), 16);
    assert!(fragment.chars().all(|c| c.is_ascii_hexdigit()));
}

// ============================================================================
// to-turtle
// ============================================================================

#[test]
fn to_turtle_converts_and_continues_past_failures() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("rdf")).unwrap();
    fs::write(tmp.path().join("rdf/bad.rdf"), "<not-rdf").unwrap();
    fs::write(tmp.path().join("rdf/good.rdf"), RDFXML).unwrap();

    sssom_cmd(&tmp)
        .args(["to-turtle", "rdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Converted: good.rdf -> good.ttl"))
        .stderr(predicate::str::contains("warning:"));

    assert!(tmp.path().join("rdf/good.ttl").is_file());
    assert!(!tmp.path().join("rdf/bad.ttl").exists());

    let store = load_turtle(&tmp.path().join("rdf/good.ttl"));
    assert!(has_iri_triple(
        &store,
        "http://example.org/a",
        "http://example.org/p",
        "http://example.org/b"
    ));
}

#[test]
fn to_turtle_reports_empty_directory() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("rdf")).unwrap();

    sssom_cmd(&tmp)
        .args(["to-turtle", "rdf"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No .rdf files found"));
}

// ============================================================================
// review
// ============================================================================

#[test]
fn review_list_prints_mappings_without_writing() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("set.ttl"), AXIOM_SET_TTL).unwrap();

    sssom_cmd(&tmp)
        .args(["review", "-a", "set.ttl", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://a/x"))
        .stdout(predicate::str::contains("http://b/w"))
        .stdout(predicate::str::contains("2 mappings"));

    assert!(!tmp.path().join("output").exists());
}

#[test]
fn review_records_decisions() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("set.ttl"), AXIOM_SET_TTL).unwrap();

    sssom_cmd(&tmp)
        .args([
            "review",
            "-a",
            "set.ttl",
            "--reviewer-id",
            "orcid:0000-0001-2345-6789",
            "--reviewer-name",
            "Ada",
        ])
        .write_stdin("y\nlabels agree\nn\nwrong branch\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("REVIEW COMPLETE"));

    let out_path = tmp.path().join("output/set_Ada.ttl");
    assert!(out_path.is_file());

    let store = load_turtle(&out_path);
    let decisions: Vec<String> = objects_of(&store, sssom_vocab::sssom::REVIEWER_DECISION)
        .iter()
        .filter_map(|term| match term {
            Term::Literal(literal) => Some(literal.value().to_string()),
            _ => None,
        })
        .collect();
    assert_eq!(decisions.len(), 2);
    assert!(decisions.contains(&"accept".to_string()));
    assert!(decisions.contains(&"reject".to_string()));

    let ids = objects_of(&store, sssom_vocab::sssom::REVIEWER_ID);
    assert!(ids.iter().any(|term| matches!(
        term,
        Term::Literal(l) if l.value() == "orcid:0000-0001-2345-6789"
    )));
}

// ============================================================================
// match
// ============================================================================

#[test]
fn match_requires_a_jar() {
    let tmp = TempDir::new().unwrap();
    sssom_cmd(&tmp)
        .args(["match", "a.ttl", "b.ttl", "out"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("no matcher jar configured"));
}

#[test]
fn match_rejects_missing_jar_file() {
    let tmp = TempDir::new().unwrap();
    sssom_cmd(&tmp)
        .args([
            "match",
            "a.ttl",
            "b.ttl",
            "out",
            "--jar",
            "/nonexistent/matcher.jar",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matcher jar not found"));
}
