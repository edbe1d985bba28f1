//! End-to-end generation tests: key table in, C++ source text out.

use codegen::{emit_tree, generate, CharWidth, Config, DecisionNode, KeyTable};
use common::assert_strings_eq;
use common::sink::StringSink;
use indexmap::IndexMap;
use smol_str::SmolStr;

fn table(entries: &[(&str, &str)]) -> KeyTable {
    KeyTable::build(
        entries
            .iter()
            .map(|(k, v)| (SmolStr::new(k), v.to_string()))
            .collect::<IndexMap<_, _>>(),
    )
}

fn config(prefix: &str, value_type: &str, char_width: CharWidth, encapsulate: bool) -> Config {
    Config {
        prefix: SmolStr::new(prefix),
        value_type: value_type.to_string(),
        char_width,
        encapsulate,
    }
}

fn render(table: &KeyTable, config: &Config) -> String {
    let mut sink = StringSink::new();
    generate(table, config, &mut sink).unwrap();
    sink.into_string()
}

#[test]
fn keyword_table_narrow_encapsulated() {
    let _guard = test_utils::setup_tracing_with_filter("codegen=trace");

    let table = table(&[
        ("if", "TokenKind::If"),
        ("in", "TokenKind::In"),
        ("int", "TokenKind::Int"),
        ("do", "TokenKind::Do"),
    ]);
    let config = config("kw", "TokenKind", CharWidth::Narrow, true);

    let expected = r#"namespace {

static const char *const kwKeys[] = {
    "if",
    "in",
    "int",
    "do",
};

static const TokenKind kwValues[] = {
    TokenKind::If,
    TokenKind::In,
    TokenKind::Int,
    TokenKind::Do,
};

} // namespace

class kwLookupTable {
public:
    static int findIndex(const char *query, int length) {
        int index = -1;
        switch (length) {
        case 2:
            switch (query[1]) {
            case 'f':
                if (std::memcmp(query, kwKeys[0], 2) == 0) {
                    index = 0;
                }
                break;
            case 'n':
                if (std::memcmp(query, kwKeys[1], 2) == 0) {
                    index = 1;
                }
                break;
            case 'o':
                if (std::memcmp(query, kwKeys[3], 2) == 0) {
                    index = 3;
                }
                break;
            }
            break;
        case 3:
            if (std::memcmp(query, kwKeys[2], 3) == 0) {
                index = 2;
            }
            break;
        }
        return index;
    }

    static TokenKind valueAtIndex(int index) {
        assert(index >= 0 && index < 4);
        return kwValues[index];
    }
};
"#;

    assert_strings_eq!(render(&table, &config), expected);
}

#[test]
fn single_length_group_uses_a_guard_instead_of_a_switch() {
    let table = table(&[("ab", "A"), ("ac", "B")]);
    let config = config("op", "Op", CharWidth::Narrow, false);

    let expected = r#"static const char *const opKeys[] = {
    "ab",
    "ac",
};

static const Op opValues[] = {
    A,
    B,
};

class opLookupTable {
public:
    static int findIndex(const char *query, int length) {
        int index = -1;
        if (length == 2) {
            switch (query[1]) {
            case 'b':
                if (std::memcmp(query, opKeys[0], 2) == 0) {
                    index = 0;
                }
                break;
            case 'c':
                if (std::memcmp(query, opKeys[1], 2) == 0) {
                    index = 1;
                }
                break;
            }
        }
        return index;
    }

    static Op valueAtIndex(int index) {
        assert(index >= 0 && index < 2);
        return opValues[index];
    }
};
"#;

    assert_strings_eq!(render(&table, &config), expected);
}

#[test]
fn empty_table_always_misses() {
    let table = table(&[]);
    let config = config("empty", "Token", CharWidth::Narrow, true);

    let expected = r#"class emptyLookupTable {
public:
    static int findIndex(const char *query, int length) {
        (void)query;
        (void)length;
        return -1;
    }

    static Token valueAtIndex(int index) {
        (void)index;
        assert(!"emptyLookupTable is empty");
        std::abort();
    }
};
"#;

    assert_strings_eq!(render(&table, &config), expected);
}

#[test]
fn wide_table_with_zero_length_key() {
    let table = table(&[("", "Tok::Empty"), ("a", "Tok::A")]);
    let config = config("w", "Tok", CharWidth::Wide, true);

    let expected = r#"namespace {

static const wchar_t *const wKeys[] = {
    L"",
    L"a",
};

static const Tok wValues[] = {
    Tok::Empty,
    Tok::A,
};

} // namespace

class wLookupTable {
public:
    static int findIndex(const wchar_t *query, int length) {
        int index = -1;
        switch (length) {
        case 0:
            index = 0;
            break;
        case 1:
            if (std::wmemcmp(query, wKeys[1], 1) == 0) {
                index = 1;
            }
            break;
        }
        return index;
    }

    static Tok valueAtIndex(int index) {
        assert(index >= 0 && index < 2);
        return wValues[index];
    }
};
"#;

    assert_strings_eq!(render(&table, &config), expected);
}

#[test]
fn one_branch_char_switch_renders_as_a_guard() {
    // `discriminate` never builds a one-branch character switch, but the
    // emitter accepts any well-formed tree.
    let table = table(&[("a", "A")]);
    let config = config("t", "T", CharWidth::Narrow, false);
    let tree = DecisionNode::SwitchOnLength {
        branches: vec![(
            1,
            DecisionNode::SwitchOnChar {
                position: 0,
                branches: vec![('a', DecisionNode::Leaf(0))],
            },
        )],
    };

    let mut sink = StringSink::new();
    emit_tree(&table, &tree, &config, &mut sink).unwrap();
    let output = sink.into_string();

    assert!(output.contains("if (length == 1) {"));
    assert!(output.contains("if (query[0] == 'a') {"));
    assert!(!output.contains("switch"));
}

#[test]
fn generation_is_deterministic() {
    let table = table(&[
        ("car", "CAR"),
        ("cat", "CAT"),
        ("bar", "BAR"),
        ("bus", "BUS"),
    ]);
    let config = config("x", "X", CharWidth::Narrow, true);

    assert_eq!(render(&table, &config), render(&table, &config));
}

#[test]
fn value_expressions_pass_through_verbatim() {
    let table = table(&[("k", "make_value(1, \"raw\")")]);
    let config = config("v", "Value", CharWidth::Narrow, false);

    let output = render(&table, &config);
    assert!(output.contains("    make_value(1, \"raw\"),"));
}
