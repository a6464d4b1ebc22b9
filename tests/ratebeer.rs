use std::collections::{BTreeMap, HashMap};
use std::io::Cursor;
use std::path::PathBuf;

use ratebeer_kg::config::{CalendarZone, EncodingPolicy, GraphVariant, LinkPolicy, PipelineConfig};
use ratebeer_kg::error::Error;
use ratebeer_kg::pipelines::{Dataset, Pipeline, RateBeerLoader, Records, Triples};
use ratebeer_kg::record::Record;
use ratebeer_kg::triples::{Relation, Triple};

/// First reviews of the RateBeer dump.
/// The last style is latin-1 encoded, and is replaced when decoded.
fn four_reviews() -> Vec<u8> {
    let mut dump = b"beer/name: John Harvards Simcoe IPA
beer/beerId: 63836
beer/brewerId: 8481
beer/ABV: 5.4
beer/style: India Pale Ale &#40;IPA&#41;
review/appearance: 4/5
review/aroma: 6/10
review/palate: 3/5
review/taste: 6/10
review/overall: 13/20
review/time: 1157587200
review/profileName: hopdog
review/text: On tap at the Springfield, PA location.

beer/name: John Harvards Simcoe IPA
beer/beerId: 63836
beer/brewerId: 8481
beer/ABV: 5.4
beer/style: India Pale Ale &#40;IPA&#41;
review/appearance: 4/5
review/aroma: 6/10
review/palate: 4/5
review/taste: 7/10
review/overall: 13/20
review/time: 1157241600
review/profileName: TomDecapolis
review/text: On tap at the John Harvards in Springfield PA.

beer/name: John Harvards Cristal Pilsner
beer/beerId: 71716
beer/brewerId: 8481
beer/ABV: 5
beer/style: Bohemian Pilsener
review/appearance: 4/5
review/aroma: 5/10
review/palate: 3/5
review/taste: 6/10
review/overall: 14/20
review/time: 958694400
review/profileName: PhillyBeer2112
review/text: UPDATED: FEB 19, 2003 Springfield, PA.

beer/name: John Harvards Fancy Lawnmower Beer
beer/beerId: 64125
beer/brewerId: 8481
beer/ABV: 5.4
beer/style: K"
        .to_vec();
    dump.push(0xf6);
    dump.extend_from_slice(
        b"lsch
review/appearance: 2/5
review/aroma: 4/10
review/palate: 2/5
review/taste: 4/10
review/overall: 8/20
review/time: 1157587200
review/profileName: TomDecapolis
review/text: On tap the Springfield PA location billed as the \"Fancy Lawnmower Light\".
",
    );
    dump
}

fn utc() -> PipelineConfig {
    PipelineConfig::default().with_zone(CalendarZone::Utc)
}

fn load(config: PipelineConfig) -> Dataset {
    RateBeerLoader::new(config)
        .load(Cursor::new(four_reviews()))
        .unwrap()
}

fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn load_four_reviews_raw() {
    let dataset = load(utc().with_encoding(EncodingPolicy::Raw));
    assert_eq!(dataset.len(), 4);
    assert_eq!(dataset.reviewers().len(), 3);

    let first = &dataset.records()[0];
    assert_eq!(first.id(), Some(0));
    assert_eq!(
        first.beer(),
        &map(&[("beerId", "71716"), ("style", "Bohemian Pilsener")])
    );
    assert_eq!(
        first.review(),
        &map(&[
            ("appearance", "4/5"),
            ("aroma", "5/10"),
            ("palate", "3/5"),
            ("taste", "6/10"),
            ("overall", "14/20"),
            ("profileName", "PhillyBeer2112"),
            ("Year", "2000"),
            ("DayOfWeek", "4"),
            ("Month", "5"),
        ])
    );

    let calendar: Vec<(&str, &str, &str)> = dataset
        .records()
        .iter()
        .map(|r| {
            (
                r.review()["Year"].as_str(),
                r.review()["Month"].as_str(),
                r.review()["DayOfWeek"].as_str(),
            )
        })
        .collect();
    assert_eq!(
        calendar,
        vec![
            ("2000", "5", "4"),
            ("2006", "9", "6"),
            ("2006", "9", "3"),
            ("2006", "9", "3"),
        ]
    );

    let last = &dataset.records()[3];
    assert_eq!(last.beer()["style"], "K\u{FFFD}lsch");
}

#[test]
fn chronological_order_is_stable() {
    let dataset = load(utc());
    let order: Vec<(Option<usize>, &str, &str)> = dataset
        .records()
        .iter()
        .map(|r| (r.id(), r.profile_name().unwrap(), r.beer_id().unwrap()))
        .collect();
    assert_eq!(
        order,
        vec![
            (Some(0), "PhillyBeer2112", "71716"),
            (Some(1), "TomDecapolis", "63836"),
            // same timestamp, file order kept
            (Some(2), "hopdog", "63836"),
            (Some(3), "TomDecapolis", "64125"),
        ]
    );
}

#[test]
fn per_reviewer_chain_skips_other_reviewers() {
    let dataset = load(utc());
    let links: Vec<(Option<usize>, Option<usize>)> = dataset
        .records()
        .iter()
        .map(|r| (r.succeeds(), r.precedes()))
        .collect();
    assert_eq!(
        links,
        vec![(None, None), (None, Some(3)), (None, None), (Some(1), None)]
    );
}

#[test]
fn global_chain() {
    let dataset = load(utc().with_linking(LinkPolicy::Global));
    let links: Vec<(Option<usize>, Option<usize>)> = dataset
        .records()
        .iter()
        .map(|r| (r.succeeds(), r.precedes()))
        .collect();
    assert_eq!(
        links,
        vec![
            (None, Some(1)),
            (Some(0), Some(2)),
            (Some(1), Some(3)),
            (Some(2), None)
        ]
    );
}

#[test]
fn prefixed_triples_of_first_review() {
    let dataset = load(utc());
    let triples = dataset.triples().unwrap();
    let first: Vec<(&str, &str, &str)> = triples
        .iter()
        .take_while(|t| t.subject == "0" || t.subject == "bee71716")
        .map(Triple::as_tuple)
        .collect();

    assert_eq!(
        first,
        vec![
            ("0", "beerId", "bee71716"),
            ("bee71716", "style", "Bohemian Pilsener"),
            ("0", "appearance", "app4/5"),
            ("0", "aroma", "aro5/10"),
            ("0", "palate", "pal3/5"),
            ("0", "taste", "tas6/10"),
            ("0", "overall", "ove14/20"),
            ("0", "profileName", "proPhillyBeer2112"),
            ("0", "Year", "yr_2000"),
            ("0", "Month", "mon_5"),
            ("0", "DayOfWeek", "wk_4"),
        ]
    );

    let links: Vec<(&str, &str, &str)> = triples
        .iter()
        .filter(|t| matches!(t.relation, Relation::Precedes | Relation::Succeeds))
        .map(Triple::as_tuple)
        .collect();
    assert_eq!(links, vec![("1", "precedes", "3"), ("3", "succeeds", "1")]);
}

#[test]
fn excluded_fields_never_emitted() {
    let triples = load(utc()).triples().unwrap();
    assert!(triples
        .iter()
        .all(|t| !matches!(t.relation, Relation::Abv | Relation::Name | Relation::BrewerId)));

    let full = load(utc().with_graph(GraphVariant::Full)).triples().unwrap();
    let nb_abv = full.iter().filter(|t| t.relation == Relation::Abv).count();
    assert_eq!(nb_abv, 4);
}

#[test]
fn style_shared_by_beer() {
    let triples = load(utc()).triples().unwrap();
    let style_subjects: Vec<&str> = triples
        .iter()
        .filter(|t| t.relation == Relation::Style)
        .map(|t| t.subject.as_str())
        .collect();
    // reviews 1 and 2 are about the same beer
    assert_eq!(
        style_subjects,
        vec!["bee71716", "bee63836", "bee63836", "bee64125"]
    );
}

#[test]
fn reviewer_chain_round_trip() {
    let dataset = load(utc());
    let by_id: HashMap<usize, &Record> = dataset
        .records()
        .iter()
        .map(|r| (r.id().unwrap(), r))
        .collect();

    for reviewer in dataset.reviewers().iter() {
        let mut expected: Vec<usize> = dataset
            .records()
            .iter()
            .filter(|r| r.profile_name() == Some(reviewer.as_str()))
            .filter_map(Record::id)
            .collect();
        expected.sort_unstable();

        // walk back from the last review using succeeds
        let mut walked = vec![];
        let mut current = expected.last().copied();
        while let Some(id) = current {
            walked.push(id);
            current = by_id[&id].succeeds();
        }
        walked.reverse();
        assert_eq!(walked, expected, "chain of {}", reviewer);
    }
}

#[test]
fn ids_are_dense() {
    let dataset = load(utc());
    let mut ids: Vec<usize> = dataset.records().iter().filter_map(Record::id).collect();
    ids.sort_unstable();
    assert_eq!(ids, (0..dataset.len()).collect::<Vec<_>>());
}

#[test]
fn idempotent() {
    let a = load(utc()).triples().unwrap();
    let b = load(utc()).triples().unwrap();
    assert_eq!(a, b);
}

#[test]
fn id_triples_use_trimmed_vocabulary() {
    let dataset = load(utc());
    let (mapping, encoded) = dataset.id_triples().unwrap();
    assert_eq!(encoded.len(), dataset.triples().unwrap().len());
    // first triple is (0, beerId, bee71716)
    assert_eq!(encoded[0], [0, 8, 1]);
    assert_eq!(mapping.get("bee71716"), Some(1));
}

#[test]
fn triples_pipeline_writes_files() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("ratebeer.txt");
    std::fs::write(&src, four_reviews()).unwrap();
    let dst = dir.path().join("out");

    let summary = Triples::new(src, dst.clone(), utc())
        .with_ids(true)
        .run()
        .unwrap();
    assert_eq!(summary.nb_records, 4);
    assert_eq!(summary.nb_reviewers, 3);

    let tsv = std::fs::read_to_string(dst.join("triples.tsv")).unwrap();
    assert_eq!(tsv.lines().count(), summary.nb_triples);
    assert!(tsv.starts_with("0\tbeerId\tbee71716\n"));
    assert!(tsv.lines().all(|l| l.split('\t').count() == 3));

    let entities = std::fs::read_to_string(dst.join("entity_to_id.tsv")).unwrap();
    assert_eq!(Some(entities.lines().count()), summary.nb_entities);
    assert!(dst.join("relation_to_id.tsv").exists());
    assert!(dst.join("triples_ids.tsv").exists());
}

#[test]
fn records_pipeline_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("ratebeer.txt");
    std::fs::write(&src, four_reviews()).unwrap();

    let nb = Records::new(src, dir.path().to_path_buf(), utc())
        .run()
        .unwrap();
    assert_eq!(nb, 4);

    let jsonl = std::fs::read_to_string(dir.path().join("records.jsonl")).unwrap();
    let records: Vec<Record> = jsonl
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records[3].succeeds(), Some(1));
}

#[test]
fn empty_dump_fails_on_emission() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("ratebeer.txt");
    std::fs::write(&src, "\n\n").unwrap();

    let res = Triples::new(src, dir.path().join("out"), utc()).run();
    assert!(matches!(res, Err(Error::EmptyDataset)));
}

#[test]
fn pipeline_no_source() {
    let src = PathBuf::from("svdkjljlkmjlmdsfljkf.txt");
    let dst = PathBuf::from("fzjoijzoecijzoiej");

    let p = Triples::new(src, dst.clone(), utc());
    assert!(matches!(p.run(), Err(Error::Io(_))));
    assert!(!dst.exists());
}

#[test]
fn failed_id_mapping_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let src = dir.path().join("ratebeer.txt");
    std::fs::write(&src, four_reviews()).unwrap();
    let dst = dir.path().join("out");

    // name and brewerId are kept, but the trimmed vocabulary has no id for them
    let config = utc().with_excluded_beer_fields(["ABV"]);
    let res = Triples::new(src, dst.clone(), config).with_ids(true).run();

    assert!(matches!(res, Err(Error::UnknownRelation(_))));
    assert!(!dst.exists());
}
