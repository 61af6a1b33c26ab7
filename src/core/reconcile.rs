use crate::models::{ManualTimeBlock, SourceRule, WindowMask};

/// Bridge the deprecated `window_masks` wire format into the current
/// source-rule / manual-block split.
///
/// New-format data wins: if the client sent any source rules or manual
/// blocks, the legacy masks are ignored wholesale — old and new entries are
/// never merged. Otherwise each mask becomes exactly one new-format entity:
/// a genuine time range (`end > start`) becomes a [`ManualTimeBlock`], and a
/// degenerate range becomes a [`SourceRule`] with the range discarded.
///
/// The degenerate arm is unreachable while `WindowMask` validation requires
/// `end > start`; it is kept deliberately, since legacy senders used a
/// collapsed range to mean "source-bound rule" and the mask invariant may be
/// relaxed again to readmit them.
///
/// This shim is the only place legacy masks are interpreted; delete this
/// module once legacy clients are retired.
pub fn reconcile(
    masks: &[WindowMask],
    source_rules: &[SourceRule],
    manual_blocks: &[ManualTimeBlock],
) -> (Vec<SourceRule>, Vec<ManualTimeBlock>) {
    if !source_rules.is_empty() || !manual_blocks.is_empty() {
        return (source_rules.to_vec(), manual_blocks.to_vec());
    }

    let mut rules = Vec::new();
    let mut blocks = Vec::new();
    for mask in masks {
        if mask.end > mask.start {
            blocks.push(ManualTimeBlock {
                name: mask.name.clone(),
                start: mask.start,
                end: mask.end,
                mode: mask.mode,
                source_type: mask.source_type.clone(),
            });
        } else {
            rules.push(SourceRule {
                name: mask.name.clone(),
                mode: mask.mode,
                source_type: mask.source_type.clone(),
                source_ref: mask.source_ref.clone(),
            });
        }
    }
    (rules, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GateMode;

    fn mask(name: &str, start: f64, end: f64) -> WindowMask {
        WindowMask {
            name: name.to_string(),
            start,
            end,
            mode: GateMode::Deny,
            source_type: "ground_contact".to_string(),
            source_ref: "gs-madrid".to_string(),
        }
    }

    #[test]
    fn new_format_data_ignores_legacy_masks_entirely() {
        let masks = vec![mask("legacy", 0.0, 2.0)];
        let rules = vec![SourceRule {
            name: "contacts".to_string(),
            mode: GateMode::Allow,
            source_type: "ground_contact".to_string(),
            source_ref: String::new(),
        }];

        let (out_rules, out_blocks) = reconcile(&masks, &rules, &[]);
        assert_eq!(out_rules.len(), 1);
        assert_eq!(out_rules[0].name, "contacts");
        assert!(out_blocks.is_empty());
    }

    #[test]
    fn manual_blocks_alone_also_suppress_legacy_masks() {
        let masks = vec![mask("legacy", 0.0, 2.0)];
        let blocks = vec![ManualTimeBlock {
            name: "quiet".to_string(),
            start: 3.0,
            end: 4.0,
            mode: GateMode::Deny,
            source_type: "manual".to_string(),
        }];

        let (out_rules, out_blocks) = reconcile(&masks, &[], &blocks);
        assert!(out_rules.is_empty());
        assert_eq!(out_blocks.len(), 1);
        assert_eq!(out_blocks[0].name, "quiet");
    }

    #[test]
    fn ranged_mask_becomes_manual_block_with_fields_intact() {
        let masks = vec![mask("pass-1", 1.5, 3.5)];

        let (rules, blocks) = reconcile(&masks, &[], &[]);
        assert!(rules.is_empty());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].name, "pass-1");
        assert_eq!(blocks[0].start, 1.5);
        assert_eq!(blocks[0].end, 3.5);
        assert_eq!(blocks[0].mode, GateMode::Deny);
        assert_eq!(blocks[0].source_type, "ground_contact");
    }

    // Collapsed ranges cannot pass WindowMask::validate today; build the
    // struct directly to cover the arm that a relaxed invariant would hit.
    #[test]
    fn collapsed_range_mask_becomes_source_rule() {
        let masks = vec![mask("contacts", 0.0, 0.0)];

        let (rules, blocks) = reconcile(&masks, &[], &[]);
        assert!(blocks.is_empty());
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].name, "contacts");
        assert_eq!(rules[0].mode, GateMode::Deny);
        assert_eq!(rules[0].source_ref, "gs-madrid");
    }

    #[test]
    fn each_mask_lands_in_exactly_one_output_list() {
        let masks = vec![mask("a", 0.0, 1.0), mask("b", 2.0, 2.0), mask("c", 3.0, 9.0)];

        let (rules, blocks) = reconcile(&masks, &[], &[]);
        assert_eq!(rules.len() + blocks.len(), masks.len());
        assert_eq!(blocks[0].name, "a");
        assert_eq!(rules[0].name, "b");
        assert_eq!(blocks[1].name, "c");
    }
}
