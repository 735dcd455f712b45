//! Demo suite - the sample registration table for the `gauntlet` binary
//!
//! Stands in for a host project's statically registered modules so the
//! binary is runnable on its own and exercisable end to end. Everything
//! here is deterministic.

use gauntlet_engine::{Catalog, Registry, TestRecord};

fn check_addition() -> Result<(), String> {
    if 2 + 2 == 4 {
        Ok(())
    } else {
        Err("2 + 2 != 4".to_string())
    }
}

fn check_subtraction() -> Result<(), String> {
    if 7 - 5 == 2 {
        Ok(())
    } else {
        Err("7 - 5 != 2".to_string())
    }
}

fn check_wrapping_mul() -> Result<(), String> {
    // Marked as a known issue in the catalog; never invoked.
    Err("wrapping multiply disagrees on 32-bit targets".to_string())
}

fn check_division() -> Result<(), String> {
    if 9 / 3 == 3 {
        Ok(())
    } else {
        Err("9 / 3 != 3".to_string())
    }
}

fn arith() -> Catalog {
    Catalog::new(
        "arith",
        "Arithmetic",
        vec![
            TestRecord::new("integer addition", check_addition),
            TestRecord::new("integer subtraction", check_subtraction),
            TestRecord::new("wrapping multiplication", check_wrapping_mul)
                .with_known_issue("differs on 32-bit targets"),
            TestRecord::new("integer division", check_division).with_disabled(1),
        ],
    )
    .with_summary_comment("sample module")
}

fn reset_scratch() -> Result<(), String> {
    Ok(())
}

fn check_uppercase() -> Result<(), String> {
    if "abc".to_uppercase() == "ABC" {
        Ok(())
    } else {
        Err("uppercase mapping broken".to_string())
    }
}

fn check_split() -> Result<(), String> {
    let words: Vec<&str> = "one two three".split_whitespace().collect();
    if words.len() == 3 {
        Ok(())
    } else {
        Err(format!("expected 3 words, got {}", words.len()))
    }
}

fn text() -> Catalog {
    Catalog::new(
        "text",
        "Text handling",
        vec![
            TestRecord::new("uppercase mapping", check_uppercase),
            TestRecord::new("whitespace split", check_split),
        ],
    )
    .with_pre_test(reset_scratch)
    .with_post_test(reset_scratch)
    .with_list_comment("string helpers")
}

/// The full demo registry, in registration order.
pub fn registry() -> Registry {
    Registry::new(vec![arith(), text()])
}
