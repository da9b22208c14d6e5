//! Property-based tests for paragraph alignment and change scoring.
//!
//! Ensures the aligners account for every paragraph exactly once across
//! random inputs, and that classification and risk rating stay consistent.

use docdiff::analysis::{RiskAssessor, RiskLevel};
use docdiff::diff::{Change, ChangeKind, DiffEngine};
use docdiff::matching::{
    AlignmentPair, AlignmentStrategy, GreedyAligner, OrderedAligner, ParagraphAligner,
};
use docdiff::model::Paragraph;
use proptest::prelude::*;

/// Short texts from a tiny alphabet so that near matches are common.
fn paragraphs() -> impl Strategy<Value = Vec<Paragraph>> {
    prop::collection::vec("[a-c]{1,3}( [a-c]{1,3}){0,4}", 0..8).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Paragraph::new(1 + (i / 3) as u32, i % 3, text))
            .collect()
    })
}

fn position(list: &[Paragraph], p: &Paragraph) -> usize {
    list.iter()
        .position(|q| q.page_number == p.page_number && q.index == p.index)
        .expect("paragraph comes from the input")
}

/// Every input paragraph appears in exactly one pair.
fn assert_coverage(
    old: &[Paragraph],
    new: &[Paragraph],
    pairs: &[AlignmentPair],
) -> Result<(), TestCaseError> {
    let mut old_seen = vec![0usize; old.len()];
    let mut new_seen = vec![0usize; new.len()];
    for pair in pairs {
        if let Some(p) = pair.old_paragraph() {
            old_seen[position(old, p)] += 1;
        }
        if let Some(p) = pair.new_paragraph() {
            new_seen[position(new, p)] += 1;
        }
    }
    prop_assert!(old_seen.iter().all(|&n| n == 1), "old coverage {:?}", old_seen);
    prop_assert!(new_seen.iter().all(|&n| n == 1), "new coverage {:?}", new_seen);
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn greedy_covers_each_paragraph_once(old in paragraphs(), new in paragraphs()) {
        let pairs = GreedyAligner::default().align(&old, &new);
        assert_coverage(&old, &new, &pairs)?;
    }

    #[test]
    fn ordered_covers_each_paragraph_once(old in paragraphs(), new in paragraphs()) {
        let pairs = OrderedAligner::new(0.6).align(&old, &new);
        assert_coverage(&old, &new, &pairs)?;
    }

    #[test]
    fn greedy_output_order(old in paragraphs(), new in paragraphs()) {
        let pairs = GreedyAligner::default().align(&old, &new);

        // One entry per old paragraph in old order, then insertions in new order
        let (head, tail) = pairs.split_at(old.len());
        for (pair, expected) in head.iter().zip(&old) {
            prop_assert_eq!(pair.old_paragraph(), Some(expected));
        }
        let mut last = None;
        for pair in tail {
            let is_inserted = matches!(pair, AlignmentPair::Inserted { .. });
            prop_assert!(is_inserted);
            let pos = position(&new, pair.new_paragraph().expect("inserted has new"));
            prop_assert!(last.map_or(true, |l| pos > l));
            last = Some(pos);
        }
    }

    #[test]
    fn ordered_pairs_never_cross(old in paragraphs(), new in paragraphs()) {
        let pairs = OrderedAligner::new(0.6).align(&old, &new);
        let matched: Vec<(usize, usize)> = pairs
            .iter()
            .filter_map(|pair| match pair {
                AlignmentPair::Matched { old: o, new: n, .. } => {
                    Some((position(&old, o), position(&new, n)))
                }
                _ => None,
            })
            .collect();
        for window in matched.windows(2) {
            prop_assert!(window[0].0 < window[1].0 && window[0].1 < window[1].1);
        }
    }

    #[test]
    fn matched_pairs_meet_threshold(
        old in paragraphs(),
        new in paragraphs(),
        threshold in 0.3f64..0.9,
    ) {
        let aligners: [Box<dyn ParagraphAligner>; 2] = [
            Box::new(GreedyAligner::new(threshold)),
            Box::new(OrderedAligner::new(threshold)),
        ];
        for aligner in &aligners {
            for pair in aligner.align(&old, &new) {
                if let AlignmentPair::Matched { similarity, .. } = pair {
                    prop_assert!(similarity > 0.0 && similarity >= threshold);
                }
            }
        }
    }

    #[test]
    fn changes_are_consistent(old in paragraphs(), new in paragraphs(), ordered in any::<bool>()) {
        let strategy = if ordered { AlignmentStrategy::Ordered } else { AlignmentStrategy::Greedy };
        let result = DiffEngine::new().with_strategy(strategy).compare_paragraphs(&old, &new);

        prop_assert_eq!(result.counts.total, result.changes.len());
        prop_assert_eq!(
            result.counts.added + result.counts.removed + result.counts.modified,
            result.counts.total
        );
        for change in &result.changes {
            match change.kind {
                ChangeKind::Added => prop_assert!(change.old_text.is_none() && change.new_text.is_some()),
                ChangeKind::Removed => prop_assert!(change.old_text.is_some() && change.new_text.is_none()),
                ChangeKind::Modified => {
                    let similarity = change.similarity.unwrap_or(0.0);
                    prop_assert!(similarity <= 0.95);
                }
            }
        }
    }

    #[test]
    fn identical_inputs_have_no_changes(paras in paragraphs(), ordered in any::<bool>()) {
        let strategy = if ordered { AlignmentStrategy::Ordered } else { AlignmentStrategy::Greedy };
        let result = DiffEngine::new().with_strategy(strategy).compare_paragraphs(&paras, &paras);
        prop_assert!(result.changes.is_empty());
        prop_assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn comparison_is_deterministic(old in paragraphs(), new in paragraphs()) {
        let engine = DiffEngine::new();
        let first = engine.compare_paragraphs(&old, &new);
        let second = engine.compare_paragraphs(&old, &new);
        prop_assert_eq!(first.changes, second.changes);
        prop_assert_eq!(first.summary_text, second.summary_text);
    }

    #[test]
    fn more_changes_never_lower_risk(
        texts in prop::collection::vec(
            prop::sample::select(vec!["penalty", "payment", "scope", "liability", "notice", "fee"]),
            0..6,
        ),
        extra in prop::sample::select(vec!["penalty", "payment", "scope", "liability", "notice", "fee"]),
    ) {
        let assessor = RiskAssessor::default();
        let mut changes: Vec<Change> = texts
            .iter()
            .map(|t| Change::added("page 1", format!("The {t} clause applies.")))
            .collect();
        let before = assessor.assess(&changes).level;
        changes.push(Change::removed("page 2", format!("Old {extra} wording.")));
        let after = assessor.assess(&changes).level;
        prop_assert!(after >= before);
    }
}
