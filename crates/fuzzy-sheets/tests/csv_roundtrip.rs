//! Open a CSV file, corrupt it and write it back

use fuzzy_sheets::prelude::*;
use pretty_assertions::assert_eq;

const INPUT: &str = "\
region,revenue,closed,owner
North,1234567.5,2024-01-15,Zoë
South,98.765,2023-12-31,José
";

#[test]
fn test_open_mutate_save() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sales.csv");
    std::fs::write(&input, INPUT).unwrap();

    let mut workbook = Workbook::open(&input).unwrap();
    assert_eq!(workbook.worksheet(0).unwrap().name(), "sales");

    let config = MutationConfig::new()
        .with_axis(
            Axis::DateFormat,
            MutationDetail::enabled_for(1.0).targeting(ValueKind::Date),
        )
        .with_axis(
            Axis::NumberFormat,
            MutationDetail::enabled_for(1.0)
                .with_strength(1.0)
                .targeting(ValueKind::Numeric),
        );
    let stats = workbook.apply_mutations_seeded(&config, 3).unwrap();
    assert_eq!(stats.mutations_for(Axis::DateFormat), 2);
    assert_eq!(stats.mutations_for(Axis::NumberFormat), 2);

    let output = dir.path().join("sales_mutated.csv");
    workbook.save(&output).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert_eq!(
        written,
        "region,revenue,closed,owner\r\n\
         North,\"1.234.567,5\",15/01/2024,Zoë\r\n\
         South,\"98,765\",31/12/2023,José\r\n"
    );

    // Day-first dates and European numbers no longer parse as typed values
    let reread = Workbook::open(&output).unwrap();
    let sheet = reread.worksheet(0).unwrap();
    assert_eq!(sheet.cell_at(1, 1).unwrap().value.as_text(), Some("1.234.567,5"));
    assert_eq!(sheet.cell_at(1, 2).unwrap().value.as_text(), Some("15/01/2024"));
}

#[test]
fn test_open_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Workbook::open(dir.path().join("missing.csv")).is_err());
}
