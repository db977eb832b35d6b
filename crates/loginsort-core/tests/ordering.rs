//! 排序规则的场景与性质测试
use loginsort_core::{Category, Classifier, Entry, LoginSorter, RuleSet};
use proptest::prelude::*;
use serde_json::{Map, Value};
use std::cmp::Ordering;

fn sorter() -> LoginSorter {
    LoginSorter::new(RuleSet::default()).unwrap()
}

fn entry(name: &str, url: &str, id: usize) -> Entry {
    let mut fields = Map::new();
    fields.insert("name".into(), Value::String(name.into()));
    fields.insert("url".into(), Value::String(url.into()));
    fields.insert("id".into(), Value::from(id));
    Entry::from(fields)
}

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(Entry::name).collect()
}

fn ids(entries: &[Entry]) -> Vec<u64> {
    entries.iter().filter_map(|e| e.get("id")?.as_u64()).collect()
}

#[test]
fn sentinel_goes_last_and_flagged_first() {
    let out = sorter().sort(vec![
        entry("Teste", "a", 0),
        entry("👎bad", "b", 1),
        entry("Alice", "c", 2),
    ]);
    assert_eq!(names(&out), ["👎bad", "Alice", "Teste"]);
}

#[test]
fn higher_priority_glyph_first() {
    let out = sorter().sort(vec![entry("🔥", "x", 0), entry("❌", "y", 1)]);
    assert_eq!(names(&out), ["❌", "🔥"]);
}

#[test]
fn trailing_words_sort_descending() {
    let out = sorter().sort(vec![entry("Team Zeta", "m", 0), entry("Team Alpha", "n", 1)]);
    assert_eq!(names(&out), ["Team Zeta", "Team Alpha"]);
}

#[test]
fn url_breaks_remaining_ties_descending() {
    let out = sorter().sort(vec![entry("X", "apple", 0), entry("X", "banana", 1)]);
    assert_eq!(ids(&out), [1, 0]);
}

#[test]
fn realistic_backup_ordering() {
    let input = [
        ("🔥", "https://b.example"),
        ("Teste", "https://t.example"),
        ("💧🔥", "https://c.example"),
        ("Maria 🟢", "https://m.example"),
        ("👎 antigo", "https://a.example"),
        ("João", "https://j.example"),
        ("📺", "https://p.example"),
        ("🟢", "https://g.example"),
        ("Maria ❌", "https://n.example"),
        ("🔞📺", "https://q.example"),
        ("👎 antigo", "https://z.example"),
    ];
    let entries = input.iter().enumerate().map(|(i, (n, u))| entry(n, u, i)).collect();
    let out = sorter().sort(entries);
    let got: Vec<(&str, &str)> = out.iter().map(|e| (e.name(), e.url())).collect();
    assert_eq!(
        got,
        [
            ("👎 antigo", "https://z.example"),
            ("👎 antigo", "https://a.example"),
            ("Maria ❌", "https://n.example"),
            ("Maria 🟢", "https://m.example"),
            ("João", "https://j.example"),
            ("📺", "https://p.example"),
            ("🔞📺", "https://q.example"),
            ("🟢", "https://g.example"),
            ("💧🔥", "https://c.example"),
            ("🔥", "https://b.example"),
            ("Teste", "https://t.example"),
        ]
    );
}

// 名称由片段拼接，覆盖全部类别与符号组合
fn name_strategy() -> impl Strategy<Value = String> {
    let fragments = prop::sample::select(vec![
        "Teste", "👎", "❌", "📺", "🔞", "🟢", "💧", "🔥", "🌟", "Alice", "Zeta", "ção", "Ü", " ",
        "7", "_", "ñ", "✔", "\u{FE0F}", "\u{200D}", "\u{20E3}",
    ]);
    prop_oneof![
        Just("Teste".to_string()),
        prop::collection::vec(fragments, 0..4).prop_map(|parts| parts.concat()),
    ]
}

fn entries_strategy() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec((name_strategy(), "[a-c]{0,2}"), 0..24).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (name, url))| entry(&name, &url, i))
            .collect()
    })
}

proptest! {
    #[test]
    fn output_is_a_permutation(entries in entries_strategy()) {
        let n = entries.len();
        let mut before = entries.clone();
        let mut after = sorter().sort(entries);
        prop_assert_eq!(after.len(), n);
        let key = |e: &Entry| e.get("id").and_then(Value::as_u64);
        before.sort_by_key(key);
        after.sort_by_key(key);
        prop_assert_eq!(before, after);
    }

    #[test]
    fn sorting_is_idempotent(entries in entries_strategy()) {
        let s = sorter();
        let once = s.sort(entries);
        let twice = s.sort(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn adjacent_pairs_never_descend(entries in entries_strategy()) {
        let s = sorter();
        let out = s.sort(entries);
        for pair in out.windows(2) {
            prop_assert_ne!(s.compare(&pair[0], &pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn sentinels_last_and_flagged_first(entries in entries_strategy()) {
        let s = sorter();
        let out = s.sort(entries);
        let cats: Vec<Category> = out.iter().map(|e| s.classify(e.name())).collect();
        if let Some(first_sentinel) = cats.iter().position(|c| *c == Category::Sentinel) {
            prop_assert!(cats[first_sentinel..].iter().all(|c| *c == Category::Sentinel));
        }
        if let Some(last_flagged) = cats.iter().rposition(|c| *c == Category::Flagged) {
            prop_assert!(cats[..last_flagged].iter().all(|c| *c == Category::Flagged));
        }
    }

    #[test]
    fn identical_entries_keep_input_order(entries in entries_strategy()) {
        let out = sorter().sort(entries);
        for (i, a) in out.iter().enumerate() {
            for b in &out[i + 1..] {
                if a.name() == b.name() && a.url() == b.url() {
                    prop_assert!(a.get("id").and_then(Value::as_u64) < b.get("id").and_then(Value::as_u64));
                }
            }
        }
    }

    #[test]
    fn trailing_token_of_word_then_emoji_is_the_word(
        word in "[A-Za-zçãé0-9_]{1,8}",
        emoji in prop::sample::select(vec![
            "✔\u{FE0F}", "👩\u{200D}💻", "#\u{FE0F}\u{20E3}", "❤\u{FE0F}", "🔥", "👍🏽",
        ]),
    ) {
        let classifier = Classifier::from_rules(&RuleSet::default()).unwrap();
        let name = format!("{word} {emoji}");
        prop_assert_eq!(classifier.trailing_token(&name), word.as_str());
    }

    #[test]
    fn comparator_is_antisymmetric_and_transitive(
        a in name_strategy(), b in name_strategy(), c in name_strategy(),
        ua in "[a-b]{0,1}", ub in "[a-b]{0,1}", uc in "[a-b]{0,1}",
    ) {
        let s = sorter();
        let (a, b, c) = (entry(&a, &ua, 0), entry(&b, &ub, 1), entry(&c, &uc, 2));
        prop_assert_eq!(s.compare(&a, &b), s.compare(&b, &a).reverse());
        if s.compare(&a, &b) != Ordering::Greater && s.compare(&b, &c) != Ordering::Greater {
            prop_assert_ne!(s.compare(&a, &c), Ordering::Greater);
        }
    }
}
