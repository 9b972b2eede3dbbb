use fix_report::message::ParseStatus;
use fix_report::parser::parse_msg;
use fix_report::report::{duplicate_fields_report, high_low_by_account, render_reports};
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #[test]
    fn blank_lines_are_empty(raw in "[ \t]{0,12}") {
        let p = parse_msg(&raw);
        prop_assert_eq!(p.status(), &ParseStatus::Empty);
        prop_assert!(p.fields().is_empty());
        prop_assert_eq!(p.original(), raw.as_str());
    }

    #[test]
    fn distinct_tags_parse_ok(fields in prop::collection::btree_map("[0-9]{1,4}", "[A-Za-z0-9.= ]{0,8}", 1..20)) {
        let raw = fields
            .iter()
            .map(|(t, v)| format!("{t}={v}"))
            .collect::<Vec<_>>()
            .join("|");
        let p = parse_msg(&format!("{raw}|"));
        prop_assert!(p.is_ok());
        prop_assert_eq!(p.fields().len(), fields.len());
        for (t, v) in &fields {
            prop_assert_eq!(p.get(t), Some(v.as_str()));
        }
    }

    #[test]
    fn repeated_tag_is_first_duplicate(tags in prop::collection::vec("[0-9]{1,2}", 1..30)) {
        let raw = tags.iter().map(|t| format!("{t}=v")).collect::<Vec<_>>().join("|");
        let mut seen = HashSet::new();
        let first_dup = tags.iter().find(|t| !seen.insert(t.as_str()));

        let p = parse_msg(&raw);
        match first_dup {
            Some(t) => {
                prop_assert_eq!(p.status(), &ParseStatus::DuplicateField(t.clone()));
                prop_assert!(p.fields().is_empty());
            }
            None => {
                prop_assert!(p.is_ok());
            }
        }
    }

    #[test]
    fn reports_stable_and_bounded(
        orders in prop::collection::vec(("acct[0-3]", 0u32..100_000u32), 0..50),
        dups in 0usize..5,
    ) {
        let mut msgs: Vec<_> = orders
            .iter()
            .map(|(a, px)| parse_msg(&format!("35=D|1={a}|44={}", *px as f64 / 100.0)))
            .collect();
        msgs.extend((0..dups).map(|i| parse_msg(&format!("8=a|{i}=x|8=b"))));

        prop_assert_eq!(render_reports(&msgs), render_reports(&msgs));
        prop_assert_eq!(duplicate_fields_report(&msgs).len(), if dups == 0 { 1 } else { dups + 1 });

        let by_acct = high_low_by_account(&msgs);
        for (acct, hl) in &by_acct {
            let pxs: Vec<f64> = orders
                .iter()
                .filter(|(a, _)| a.as_str() == *acct)
                .map(|(_, px)| *px as f64 / 100.0)
                .collect();
            prop_assert!(pxs.iter().all(|&p| hl.low <= p && p <= hl.high));
            prop_assert!(pxs.contains(&hl.high) && pxs.contains(&hl.low));
        }
    }
}
