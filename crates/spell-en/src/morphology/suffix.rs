// Priority-ordered suffix table, American and British variants

use std::borrow::Cow;

use spell_core::enums::Spelling;

use super::repair::Repair;
use super::stem::Stem;

/// One way of undoing a suffix: how many bytes to cut, which repair to run
/// on the cut stem, and the annotations recorded on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transform {
    pub repair: Repair,
    /// Bytes removed from the end before the repair runs.
    pub strip: usize,
    /// Annotation used when the repair changed the stem ("-y+iness").
    pub undo: Cow<'static, str>,
    /// Annotation used when the ending was simply removed ("+ness").
    pub redo: Cow<'static, str>,
}

/// A suffix and its one or two transforms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    /// The suffix written backwards, so matching walks from the word end.
    pub reversed: Cow<'static, str>,
    pub primary: Transform,
    /// Tried only when the primary transform fails.
    pub secondary: Option<Transform>,
}

impl SuffixRule {
    /// The suffix in reading order.
    pub fn suffix(&self) -> String {
        self.reversed.chars().rev().collect()
    }
}

/// The ordered rule list used by the reducer.
///
/// Rules are tried in order and only the first whose suffix matches is
/// used. There is no fallback to later rules when its transforms fail, so
/// the order is part of the behavior: "ssen" must precede "se" and "s".
#[derive(Debug, Clone)]
pub struct SuffixTable {
    spelling: Spelling,
    rules: Vec<SuffixRule>,
}

impl SuffixTable {
    pub fn new(spelling: Spelling) -> Self {
        match spelling {
            Spelling::American => Self::american(),
            Spelling::British => Self::british(),
        }
    }

    pub fn american() -> Self {
        let rules = RULES.iter().map(|row| row.build(borrowed)).collect();
        Self {
            spelling: Spelling::American,
            rules,
        }
    }

    /// The American table with every `z` in suffixes and annotations
    /// replaced by `s` ("-ize" becomes "-ise"). Rule order is unchanged.
    pub fn british() -> Self {
        let rules = RULES.iter().map(|row| row.build(z_to_s)).collect();
        Self {
            spelling: Spelling::British,
            rules,
        }
    }

    pub fn spelling(&self) -> Spelling {
        self.spelling
    }

    pub fn rules(&self) -> &[SuffixRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The first rule whose suffix ends the stem, with the offset where the
    /// suffix begins.
    pub fn first_match(&self, stem: Stem<'_>) -> Option<(&SuffixRule, usize)> {
        self.rules.iter().find_map(|rule| {
            stem.match_reversed(rule.reversed.as_bytes())
                .map(|start| (rule, start))
        })
    }
}

fn borrowed(s: &'static str) -> Cow<'static, str> {
    Cow::Borrowed(s)
}

fn z_to_s(s: &'static str) -> Cow<'static, str> {
    if s.contains('z') {
        Cow::Owned(s.replace('z', "s"))
    } else {
        Cow::Borrowed(s)
    }
}

// ---------------------------------------------------------------------------
// Static rule data
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct TransformRow {
    repair: Repair,
    strip: usize,
    undo: &'static str,
    redo: &'static str,
}

struct RuleRow {
    reversed: &'static str,
    primary: TransformRow,
    secondary: Option<TransformRow>,
}

impl TransformRow {
    fn build(&self, text: fn(&'static str) -> Cow<'static, str>) -> Transform {
        Transform {
            repair: self.repair,
            strip: self.strip,
            undo: text(self.undo),
            redo: text(self.redo),
        }
    }
}

impl RuleRow {
    fn build(&self, text: fn(&'static str) -> Cow<'static, str>) -> SuffixRule {
        SuffixRule {
            reversed: text(self.reversed),
            primary: self.primary.build(text),
            secondary: self.secondary.map(|t| t.build(text)),
        }
    }
}

const fn t(repair: Repair, strip: usize, undo: &'static str, redo: &'static str) -> TransformRow {
    TransformRow {
        repair,
        strip,
        undo,
        redo,
    }
}

const fn one(reversed: &'static str, primary: TransformRow) -> RuleRow {
    RuleRow {
        reversed,
        primary,
        secondary: None,
    }
}

const fn two(reversed: &'static str, primary: TransformRow, secondary: TransformRow) -> RuleRow {
    RuleRow {
        reversed,
        primary,
        secondary: Some(secondary),
    }
}

use Repair::*;

#[rustfmt::skip]
const RULES: &[RuleRow] = &[
    one("ssen",     t(Ily, 4, "-y+iness", "+ness")),
    one("ssel",     t(Ily, 4, "-y+iless", "+less")),
    two("se",       t(Plural, 1, "", "+s"), t(PluralEs, 2, "-y+ies", "+es")),
    one("s'",       t(Plural, 2, "", "+'s")),
    one("s",        t(Plural, 1, "", "+s")),
    one("ecn",      t(Ncy, 1, "", "-t+ce")),
    one("ycn",      t(Ncy, 1, "", "-cy+t")),
    one("ytilb",    t(Nop, 0, "", "")),
    one("ytilib",   t(Bility, 5, "-le+ility", "")),
    one("elbaif",   t(IToY, 4, "-y+iable", "")),
    one("elba",     t(CCe, 4, "-e+able", "+able")),
    one("yti",      t(CCe, 3, "-e+ity", "+ity")),
    one("ylb",      t(YToE, 1, "-e+y", "")),
    one("yl",       t(Ily, 2, "-y+ily", "+ly")),
    one("laci",     t(Strip, 2, "", "+al")),
    one("latnem",   t(Strip, 2, "", "+al")),
    one("lanoi",    t(Strip, 2, "", "+al")),
    one("tnem",     t(Strip, 4, "", "+ment")),
    one("gni",      t(CCe, 3, "-e+ing", "+ing")),
    one("reta",     t(Nop, 0, "", "")),
    two("re",       t(Strip, 1, "", "+r"), t(IToY, 2, "-y+ier", "+er")),
    two("de",       t(Strip, 1, "", "+d"), t(IToY, 2, "-y+ied", "+ed")),
    one("citsi",    t(Strip, 2, "", "+ic")),
    one("cihparg",  t(IToY, 1, "-y+ic", "")),
    two("tse",      t(Strip, 2, "", "+st"), t(IToY, 3, "-y+iest", "+est")),
    one("cirtem",   t(IToY, 1, "-y+ic", "")),
    one("yrtem",    t(Metry, 0, "-ry+er", "")),
    one("cigol",    t(IToY, 1, "-y+ic", "")),
    one("tsigol",   t(IToY, 2, "-y+ist", "")),
    one("tsi",      t(VCe, 3, "-e+ist", "+ist")),
    one("msi",      t(VCe, 3, "-e+ism", "+ist")),
    one("noitacif", t(IToY, 6, "-y+ication", "")),
    one("noitazi",  t(Ize, 5, "-e+ation", "")),
    one("rota",     t(Tion, 2, "-e+or", "")),
    one("noit",     t(Tion, 3, "-e+ion", "+ion")),
    one("naino",    t(ProperName, 3, "", "+ian")),
    one("na",       t(ProperName, 1, "", "+n")),
    one("evit",     t(Tion, 3, "-e+ive", "+ive")),
    one("ezi",      t(CCe, 3, "-e+ize", "+ize")),
    one("pihs",     t(Strip, 4, "", "+ship")),
    one("dooh",     t(Ily, 4, "-y+hood", "+hood")),
    one("ekil",     t(Strip, 4, "", "+like")),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_size_and_order() {
        let table = SuffixTable::american();
        assert_eq!(table.len(), 42);
        assert_eq!(table.rules()[0].suffix(), "ness");
        assert_eq!(table.rules().last().map(SuffixRule::suffix).as_deref(), Some("like"));
    }

    #[test]
    fn first_match_respects_priority() {
        let table = SuffixTable::american();
        let (rule, start) = table.first_match(Stem::new(b"happiness")).unwrap();
        assert_eq!(rule.suffix(), "ness");
        assert_eq!(start, 5);

        let (rule, _) = table.first_match(Stem::new(b"boxes")).unwrap();
        assert_eq!(rule.suffix(), "es");
        assert!(rule.secondary.is_some());

        let (rule, _) = table.first_match(Stem::new(b"possibility")).unwrap();
        assert_eq!(rule.suffix(), "bility");
    }

    #[test]
    fn blocking_rules_shadow_shorter_suffixes() {
        let table = SuffixTable::american();
        let (rule, _) = table.first_match(Stem::new(b"theater")).unwrap();
        assert_eq!(rule.suffix(), "ater");
        assert_eq!(rule.primary.repair, Repair::Nop);

        let (rule, _) = table.first_match(Stem::new(b"ably")).unwrap();
        assert_eq!(rule.suffix(), "bly");
    }

    #[test]
    fn no_match() {
        let table = SuffixTable::american();
        assert!(table.first_match(Stem::new(b"xyzzy")).is_none());
        assert!(table.first_match(Stem::new(b"")).is_none());
    }

    #[test]
    fn british_rewrites_z_everywhere() {
        let table = SuffixTable::british();
        assert_eq!(table.spelling(), Spelling::British);
        assert_eq!(table.len(), 42);
        for rule in table.rules() {
            assert!(!rule.reversed.contains('z'));
            for tr in std::iter::once(&rule.primary).chain(&rule.secondary) {
                assert!(!tr.undo.contains('z'));
                assert!(!tr.redo.contains('z'));
            }
        }
        let ise = table.rules().iter().find(|r| r.suffix() == "ise").unwrap();
        assert_eq!(ise.primary.undo, "-e+ise");
        assert_eq!(ise.primary.redo, "+ise");
    }

    #[test]
    fn british_keeps_rule_positions() {
        let american = SuffixTable::american();
        let british = SuffixTable::british();
        for (a, b) in american.rules().iter().zip(british.rules()) {
            assert_eq!(a.primary.repair, b.primary.repair);
            assert_eq!(a.primary.strip, b.primary.strip);
            assert_eq!(a.reversed.replace('z', "s"), b.reversed);
        }
        // "es" still wins over "ise" for "realises"
        let (rule, _) = british.first_match(Stem::new(b"realises")).unwrap();
        assert_eq!(rule.suffix(), "es");
    }

    #[test]
    fn new_selects_variant() {
        assert_eq!(SuffixTable::new(Spelling::American).spelling(), Spelling::American);
        assert_eq!(SuffixTable::new(Spelling::British).spelling(), Spelling::British);
        assert_eq!(SuffixTable::new(Spelling::default()).spelling(), Spelling::American);
    }
}
