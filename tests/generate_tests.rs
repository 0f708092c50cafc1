use entitygen::{GenError, GeneratorConfig};
use std::fs;
use std::path::{Path, PathBuf};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn test_generate_with_builtin_template() {
    let out = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(fixture("Team.xcdatamodel")).output_dir(out.path());

    let written = entitygen::generate(&config).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "Member+CoreDataProperties.swift",
            "Person+CoreDataProperties.swift",
            "Record+CoreDataProperties.swift",
            "Team+CoreDataProperties.swift",
        ]
    );

    let team = fs::read_to_string(out.path().join("Team+CoreDataProperties.swift")).unwrap();
    assert!(team.contains("@NSManaged public var teamName: String\n"));
    assert!(team.contains("@NSManaged public var memberCount: Int32?\n"));
    assert!(team.contains("@NSManaged public var members: NSSet?\n"));
    assert!(team.contains("memberCount = (json[\"member_count\"] as? NSNumber)?.int32Value ?? 0"));
    assert!(team.contains("if let membersJSON = json[\"member_list\"] as? [JSONResponse] {"));

    let member = fs::read_to_string(out.path().join("Member+CoreDataProperties.swift")).unwrap();
    assert!(member.contains("public static let uniqueKey = \"email\""));
    // Inherited attributes are populated, ignored ones are not
    assert!(member.contains("displayName = (json as AnyObject).value(forKeyPath: \"profile.display_name\") as? String"));
    assert!(member.contains("if let value = json[\"id\"] as? String {"));
    assert!(!member.contains("json[\"cache\"]"));
    // Own properties only in the @NSManaged block
    assert!(!member.contains("@NSManaged public var displayName"));
    assert!(member.contains("@NSManaged public var team: Team?\n"));
}

#[test]
fn test_generate_with_template_dir() {
    let templates = tempfile::tempdir().unwrap();
    fs::write(
        templates.path().join("summary.txt"),
        "{{ entity.name }}:{% for a in entity.all_attributes %} {{ a.json_key }}{% endfor %}\n",
    )
    .unwrap();

    let out = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(fixture("team.json"))
        .output_dir(out.path())
        .template_dir(templates.path())
        .template_name("summary.txt")
        .file_suffix("Summary")
        .file_extension("txt");

    entitygen::generate(&config).unwrap();
    let text = fs::read_to_string(out.path().join("TeamSummary.txt")).unwrap();
    assert_eq!(text, "Team: team_name member_count\n");
}

#[test]
fn test_missing_template_fails_without_output() {
    let templates = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    let config = GeneratorConfig::new(fixture("team.json"))
        .output_dir(out.path())
        .template_dir(templates.path())
        .template_name("absent.tmpl");

    let err = entitygen::generate(&config).unwrap_err();
    match err {
        GenError::Render { entity, .. } => assert_eq!(entity, "Team"),
        other => panic!("Expected render error, got {:?}", other),
    }
    assert!(!config.output_path("Team").exists());
}

#[test]
fn test_default_output_is_input_directory() {
    let config = GeneratorConfig::new(fixture("team.json"));
    assert_eq!(config.output_dir, fixture(""));
}

#[test]
fn test_unreadable_input() {
    let config = GeneratorConfig::new("/no/such/model.xml");
    let err = entitygen::generate(&config).unwrap_err();
    assert!(matches!(err, GenError::Io { .. }));
}
