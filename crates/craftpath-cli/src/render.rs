//! Human-readable rendering of query results.
//!
//! Ids are resolved through the name map where possible and always echoed in
//! parentheses, so output stays unambiguous when names collide or are absent.

use craftpath_core::{ItemId, NameMap, Path, PathResult, Step};

/// Render a result list as display text. Empty input renders `No path found`.
pub fn display_paths(results: &[PathResult], names: &NameMap) -> String {
    if results.is_empty() {
        return "No path found".to_string();
    }

    results
        .iter()
        .enumerate()
        .map(|(index, result)| {
            let segments = [
                Some(&result.path1),
                result.path2.as_ref(),
                result.converge.as_ref(),
            ];
            let body = segments
                .into_iter()
                .flatten()
                .filter(|path| !path.is_empty())
                .map(|path| render_segment(path, names))
                .collect::<Vec<_>>()
                .join("\n");
            format!("Path {}:\n{}", index + 1, body)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_segment(path: &Path, names: &NameMap) -> String {
    path.steps()
        .iter()
        .enumerate()
        .map(|(index, step)| render_step(step, index, names))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_step(step: &Step, index: usize, names: &NameMap) -> String {
    match (step.left, step.right.as_ref()) {
        (Some(left), Some(right)) => {
            let partners = right
                .iter()
                .map(|&id| item(id, names))
                .collect::<Vec<_>>()
                .join(", ");
            let prefix = if index == 1 { "Start with " } else { "" };
            format!(
                "{}{} + {} = {}",
                prefix,
                item(left, names),
                partners,
                item(step.to, names)
            )
        }
        // Seed step: no combination happened yet.
        _ => format!("Start at node {}", item(step.to, names)),
    }
}

fn item(id: ItemId, names: &NameMap) -> String {
    match names.get(&id) {
        Some(name) => format!("{name} ({id})"),
        None => format!("{id} ({id})"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftpath_core::Step;

    fn id(raw: u32) -> ItemId {
        ItemId::new(raw)
    }

    fn names() -> NameMap {
        [(1, "Fire"), (2, "Water"), (3, "Steam")]
            .into_iter()
            .map(|(raw, name)| (ItemId::new(raw), name.to_string()))
            .collect()
    }

    #[test]
    fn test_empty_results_render_no_path_found() {
        assert_eq!(display_paths(&[], &names()), "No path found");
    }

    #[test]
    fn test_single_chain_rendering() {
        let result = PathResult::single(Path::from_steps(vec![
            Step::seed(id(1)),
            Step::combine(id(1), vec![id(2)], id(3)),
        ]));

        assert_eq!(
            display_paths(&[result], &names()),
            "Path 1:\nStart at node Fire (1)\nStart with Fire (1) + Water (2) = Steam (3)"
        );
    }

    #[test]
    fn test_unnamed_ids_fall_back_to_numbers() {
        let result = PathResult::single(Path::from_steps(vec![
            Step::seed(id(7)),
            Step::combine(id(7), vec![id(8)], id(9)),
        ]));

        let text = display_paths(&[result], &names());
        assert!(text.contains("Start at node 7 (7)"));
        assert!(text.contains("7 (7) + 8 (8) = 9 (9)"));
    }

    #[test]
    fn test_merged_result_renders_all_segments() {
        let result = PathResult {
            path1: Path::from_steps(vec![
                Step::seed(id(1)),
                Step::combine(id(1), vec![id(2)], id(3)),
            ]),
            path2: Some(Path::from_steps(vec![
                Step::seed(id(9)),
                Step::combine(id(9), vec![id(8)], id(3)),
            ])),
            converge: Some(Path::from_steps(vec![Step::combine(
                id(3),
                vec![id(3)],
                id(3),
            )])),
        };

        let text = display_paths(&[result], &names());
        assert!(!text.contains("Start at node Steam (3)"));
        assert!(text.contains("Start at node 9 (9)"));
        assert!(text.contains("Steam (3) + Steam (3) = Steam (3)"));
    }

    #[test]
    fn test_multiple_results_are_numbered() {
        let chain = PathResult::single(Path::seeded(id(1)));
        let text = display_paths(&[chain.clone(), chain], &names());
        assert!(text.contains("Path 1:"));
        assert!(text.contains("Path 2:"));
    }
}
