/*!

Readers and writers for the external text formats.

Two inputs: an adjacency-list file (node count, then one `"i j"` edge line
per edge, terminated by a blank line) and a one-line disease file
(`exposed_duration infectious_duration transmission_probability
initial_infectious_count`). One output: the visualization file, which is the
adjacency text followed by the encoded history.

*/
use std::fs;
use std::path::Path;

use crate::disease::DiseaseModel;
use crate::error::DirnError;
use crate::history::{self, StateHistory};
use crate::network::ContactNetwork;

/// Parses the adjacency-list format.
///
/// Edge lines are read until the first blank line (or end of input); text
/// after the blank line is ignored. The relation is symmetric regardless of
/// which orientation(s) a file lists.
pub fn parse_adjacency_list(text: &str) -> Result<ContactNetwork, DirnError> {
    let mut lines = text.lines();
    let first = lines.next().ok_or_else(|| {
        DirnError::MalformedInput("adjacency list is empty".to_string())
    })?;
    let node_count: usize = first.trim().parse().map_err(|_| {
        DirnError::MalformedInput(format!("expected a node count, found '{first}'"))
    })?;

    let mut edges = Vec::new();
    for line in lines {
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        let mut fields = line.split_whitespace();
        let (Some(i), Some(j), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(DirnError::MalformedInput(format!(
                "expected an edge 'i j', found '{line}'"
            )));
        };
        let i: usize = i.parse().map_err(|_| {
            DirnError::MalformedInput(format!("bad node index in edge '{line}'"))
        })?;
        let j: usize = j.parse().map_err(|_| {
            DirnError::MalformedInput(format!("bad node index in edge '{line}'"))
        })?;
        edges.push((i, j));
    }
    ContactNetwork::from_edges(node_count, edges)
}

/// Parses the one-line disease format, returning the model together with the
/// initial infectious count used by the seeding procedure.
pub fn parse_disease_line(text: &str) -> Result<(DiseaseModel, usize), DirnError> {
    let line = text.lines().next().unwrap_or("");
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [exposed, infectious, probability, initial_infectious] = fields.as_slice() else {
        return Err(DirnError::MalformedInput(format!(
            "expected 'exposed infectious probability initial_count', found '{line}'"
        )));
    };
    let disease = DiseaseModel::new(
        exposed.parse()?,
        infectious.parse()?,
        probability.parse()?,
    )?;
    let initial_infectious: usize = initial_infectious.parse()?;
    Ok((disease, initial_infectious))
}

pub fn read_adjacency_file(path: impl AsRef<Path>) -> Result<ContactNetwork, DirnError> {
    parse_adjacency_list(&fs::read_to_string(path)?)
}

pub fn read_disease_file(path: impl AsRef<Path>) -> Result<(DiseaseModel, usize), DirnError> {
    parse_disease_line(&fs::read_to_string(path)?)
}

/// Writes the complete visualization file for a finished run.
pub fn write_visualization_file(
    path: impl AsRef<Path>,
    network: &ContactNetwork,
    history: &StateHistory,
) -> Result<(), DirnError> {
    let mut file = fs::File::create(path)?;
    history::write_visualization(&mut file, network, history)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    #[test]
    fn parses_a_half_listed_symmetric_matrix() {
        let network = parse_adjacency_list("4\n0 1\n1 2\n2 3\n\n").unwrap();
        assert_eq!(network.node_count(), 4);
        assert!(network.has_edge(1, 0));
        assert!(network.has_edge(3, 2));
        assert!(!network.has_edge(0, 3));
    }

    #[test]
    fn blank_line_terminates_the_edge_list() {
        let network = parse_adjacency_list("3\n0 1\n\n1 2\n").unwrap();
        assert!(network.has_edge(0, 1));
        assert!(!network.has_edge(1, 2));
    }

    #[test]
    fn listing_both_orientations_is_harmless() {
        let network = parse_adjacency_list("2\n0 1\n1 0\n").unwrap();
        assert!(network.has_edge(0, 1));
        assert_eq!(network.degree(0), 1);
    }

    #[test]
    fn adjacency_text_round_trips_through_the_parser() {
        let network = ContactNetwork::from_edges(5, [(0, 4), (1, 2), (2, 4)]).unwrap();
        let reparsed = parse_adjacency_list(&network.adjacency_text()).unwrap();
        assert_eq!(reparsed, network);
    }

    #[test]
    fn malformed_adjacency_names_the_line() {
        let error = parse_adjacency_list("3\n0 x\n").unwrap_err();
        assert!(error.to_string().contains("0 x"));

        let error = parse_adjacency_list("3\n0 1 2\n").unwrap_err();
        assert!(matches!(error, DirnError::MalformedInput(_)));

        let error = parse_adjacency_list("").unwrap_err();
        assert!(matches!(error, DirnError::MalformedInput(_)));
    }

    #[test]
    fn edge_outside_the_node_range_is_rejected() {
        assert!(matches!(
            parse_adjacency_list("2\n0 5\n"),
            Err(DirnError::InvalidParameter(_))
        ));
    }

    #[test]
    fn parses_the_disease_line() {
        let (disease, initial_infectious) = parse_disease_line("2 5 0.25 3\n").unwrap();
        assert_eq!(disease.exposed_duration, 2);
        assert_eq!(disease.infectious_duration, 5);
        assert!((disease.transmission_probability - 0.25).abs() < f64::EPSILON);
        assert_eq!(initial_infectious, 3);
    }

    #[test]
    fn disease_line_arity_and_range_checks() {
        assert!(matches!(
            parse_disease_line("2 5 0.25\n"),
            Err(DirnError::MalformedInput(_))
        ));
        assert!(matches!(
            parse_disease_line("2 5 1.25 3\n"),
            Err(DirnError::InvalidParameter(_))
        ));
        assert!(matches!(
            parse_disease_line("2 five 0.25 3\n"),
            Err(DirnError::ParseIntError(_))
        ));
    }

    #[test]
    fn reads_files_and_writes_a_visualization() {
        let dir = tempfile::tempdir().unwrap();

        let network_path = dir.path().join("ring.adj");
        let mut file = fs::File::create(&network_path).unwrap();
        write!(file, "3\n0 1\n1 2\n2 0\n\n").unwrap();
        let network = read_adjacency_file(&network_path).unwrap();
        assert_eq!(network.node_count(), 3);

        let disease_path = dir.path().join("flu.disease");
        let mut file = fs::File::create(&disease_path).unwrap();
        write!(file, "1 2 0.5 1\n").unwrap();
        let (disease, initial_infectious) = read_disease_file(&disease_path).unwrap();
        assert_eq!(disease.infectious_duration, 2);
        assert_eq!(initial_infectious, 1);

        let history = StateHistory::new();
        let out_path = dir.path().join("run.vis");
        write_visualization_file(&out_path, &network, &history).unwrap();
        let written = fs::read_to_string(&out_path).unwrap();
        assert!(written.starts_with("3\n"));
        assert!(written.ends_with("end\n"));
    }
}
