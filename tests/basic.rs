use pretty_assertions::assert_eq;
use puzzlekit::{
    input::{load_lines, split_lines},
    report::{format_neighbours, format_positions, Reporter},
    AnyGrid, CellKind, Grid, Pos,
};
use std::fs;

fn maze() -> &'static str {
    "#####\r\n#S..#\n#.#E#\n#####\n"
}

#[test]
fn split_strips_terminators() {
    let lines = split_lines(maze());
    assert_eq!(lines, vec!["#####", "#S..#", "#.#E#", "#####"]);
}

#[test]
fn lone_carriage_return_stays_in_line() {
    assert_eq!(split_lines("ab\rcd\nef"), vec!["ab\rcd", "ef"]);
}

#[test]
fn load_and_parse_file() {
    let path = std::env::temp_dir().join(format!("puzzlekit_basic_{}.txt", std::process::id()));
    fs::write(&path, maze()).unwrap();
    let lines = load_lines(&path).expect("load");
    fs::remove_file(&path).ok();

    let g: Grid<String> = Grid::parse(&lines, None).unwrap();
    assert_eq!((g.total_rows(), g.total_columns()), (4, 5));
    let start = g.find_value(&"S".to_string());
    let end = g.find_value(&"E".to_string());
    assert_eq!(start, vec![Pos::new(1, 1)]);
    assert_eq!(start[0].manhattan(end[0]), 3);
    assert_eq!(g.to_string(), "#####\n#S..#\n#.#E#\n#####");
}

#[test]
fn missing_file_names_path() {
    let err = load_lines("/definitely/not/here.txt").unwrap_err();
    assert!(format!("{err:#}").contains("/definitely/not/here.txt"));
}

#[test]
fn reporter_plain_sections() {
    let g = AnyGrid::parse(&["1 2 3", "4 5 6"], CellKind::Int, Some(" ")).unwrap();
    let mut r = Reporter::new(Vec::new(), false, false);
    r.section("Grid", &g.to_string()).unwrap();
    r.section("Matches", &format_positions(&g.find_raw("5").unwrap())).unwrap();
    r.section("Empty", "").unwrap();
    let out = String::from_utf8(r.into_inner()).unwrap();
    assert_eq!(out, "➤ Grid\n123\n456\n➤ Matches\n(1, 1)\n➤ Empty\n");
}

#[test]
fn reporter_timestamps_prefix_header() {
    let mut r = Reporter::new(Vec::new(), false, true);
    r.section("Info", "2 rows").unwrap();
    let out = String::from_utf8(r.into_inner()).unwrap();
    assert!(out.starts_with('['), "got {out:?}");
    assert!(out.contains("] ➤ Info\n2 rows\n"));
}

#[test]
fn neighbour_and_position_formatting() {
    assert_eq!(format_positions(&[]), "none");
    let g = AnyGrid::parse(&["ab", "cd"], CellKind::Text, None).unwrap();
    let n = g.neighbours(Pos::new(0, 0), true);
    assert_eq!(format_neighbours(&n), "b at (0, 1)\nc at (1, 0)\nd at (1, 1)");
}
