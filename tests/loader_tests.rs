use std::io::Cursor;

use transit_sssp::graph::Graph;
use transit_sssp::loader::{load_network_from_path, parse_network, read_network, DEFAULT_ARC_DELAY};
use transit_sssp::{Distance, Error, Strategy};

const SMALL_NETWORK: &str = "\
4 4
0 Berri-UQAM
1 Beaudry
2 Papineau
3 Frontenac
$
0 1 60
1 2 75
2 3 80
0 3 300
";

#[test]
fn test_parse_names_and_arcs_with_delay() {
    let network = parse_network(SMALL_NETWORK, DEFAULT_ARC_DELAY).unwrap();

    assert_eq!(network.vertex_count(), 4);
    assert_eq!(network.edge_count(), 4);
    assert_eq!(network.vertex_name(0).unwrap(), "Berri-UQAM");
    assert_eq!(network.vertex_name(3).unwrap(), "Frontenac");
    assert_eq!(network.weight(0, 1).unwrap(), Some(80));
    assert_eq!(network.weight(0, 3).unwrap(), Some(320));
    assert_eq!(network.weight(1, 0).unwrap(), None);
}

#[test]
fn test_loaded_network_answers_queries() {
    let network = parse_network(SMALL_NETWORK, 20).unwrap();

    for strategy in [Strategy::Dense, Strategy::Sparse] {
        let path = network.shortest_path(strategy, 0, 3).unwrap();
        assert_eq!(path.distance, Distance::Finite(275));
        let names: Vec<&str> = path.vertices.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(names, vec!["Berri-UQAM", "Beaudry", "Papineau", "Frontenac"]);
    }
}

#[test]
fn test_names_keep_inner_spaces_and_arcs_may_span_lines() {
    let input = "3 2\n2 Place des Arts\n0 McGill\n1 Peel\n$\n0 1\n 90 1 2 45\n";
    let network = parse_network(input, 0).unwrap();

    assert_eq!(network.vertex_name(2).unwrap(), "Place des Arts");
    assert_eq!(network.weight(0, 1).unwrap(), Some(90));
    assert_eq!(network.weight(1, 2).unwrap(), Some(45));
}

#[test]
fn test_read_network_from_reader() {
    let network = read_network(Cursor::new(SMALL_NETWORK), 0).unwrap();
    assert_eq!(network.weight(2, 3).unwrap(), Some(80));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = load_network_from_path("/nonexistent/network/Metro.txt", 20);
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_parse_errors_report_line() {
    let bad_header = "four 2\n";
    assert!(matches!(parse_network(bad_header, 0), Err(Error::Parse { line: 1, .. })));

    let bad_index = "2 0\n0 A\n9 B\n$\n";
    assert!(matches!(parse_network(bad_index, 0), Err(Error::Parse { line: 3, .. })));

    let no_separator = "1 1\n0 A\n0 0 5\n";
    assert!(matches!(parse_network(no_separator, 0), Err(Error::Parse { line: 3, .. })));

    let short_arcs = "2 2\n0 A\n1 B\n$\n0 1 5\n";
    assert!(matches!(parse_network(short_arcs, 0), Err(Error::Parse { .. })));

    let bad_arc_target = "2 1\n0 A\n1 B\n$\n0 2 5\n";
    assert!(matches!(parse_network(bad_arc_target, 0), Err(Error::Parse { line: 5, .. })));

    assert!(matches!(parse_network("", 0), Err(Error::Parse { line: 1, .. })));

    let huge_cost = "2 1\n0 A\n1 B\n$\n0 1 9223372036854775807\n";
    assert!(matches!(parse_network(huge_cost, 20), Err(Error::Parse { line: 5, .. })));

    let huge_arc_count = "2 18446744073709551615\n0 A\n1 B\n$\n";
    assert!(matches!(parse_network(huge_arc_count, 0), Err(Error::Parse { line: 1, .. })));
}

#[test]
fn test_negative_cost_allowed_while_delay_covers_it() {
    let input = "2 2\n0 A\n1 B\n$\n0 1 -5\n1 0 -30\n";
    assert!(matches!(parse_network(input, 20), Err(Error::Parse { line: 6, .. })));

    let input = "2 1\n0 A\n1 B\n$\n0 1 -5\n";
    let network = parse_network(input, 20).unwrap();
    assert_eq!(network.weight(0, 1).unwrap(), Some(15));
}
