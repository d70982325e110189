//! Integration tests for permutation counts and cap enforcement.

use wordperm::prelude::*;

#[test]
fn test_distinct_characters_yield_factorial_count() -> Result<()> {
    let engine = PermutationEngine::new()?;

    // 4! = 24, 5! = 120
    assert_eq!(engine.permute(Some("abcd"))?.len(), 24);
    assert_eq!(engine.permute(Some("abcde"))?.len(), 120);

    Ok(())
}

#[test]
fn test_toffee_yields_multinomial_count() -> Result<()> {
    let permutations = permute(Some("toffee"))?;

    // 6! / (2! * 2!) for the repeated f and e
    assert_eq!(permutations.len(), 180);

    Ok(())
}

#[test]
fn test_mississippi_yields_multinomial_count() -> Result<()> {
    let permutations = permute(Some("mississippi"))?;

    // 11! / (4! * 4! * 2!) for i*4, s*4, p*2
    assert_eq!(permutations.len(), 34650);

    Ok(())
}

#[test]
fn test_every_permutation_is_a_rearrangement_of_the_input() -> Result<()> {
    let word = "toffee";
    let mut expected: Vec<char> = word.chars().collect();
    expected.sort_unstable();

    let permutations = permute(Some(word))?;
    for permutation in permutations.iter() {
        let mut chars: Vec<char> = permutation.chars().collect();
        chars.sort_unstable();
        assert_eq!(chars, expected, "{permutation} is not a rearrangement of {word}");
    }

    Ok(())
}

#[test]
fn test_ten_distinct_characters_land_exactly_on_the_cap() -> Result<()> {
    let permutations = permute(Some("abcdefghij"))?;

    // 10! is the cap itself, so nothing is truncated
    assert_eq!(permutations.len(), MAX_PERMUTATIONS);

    Ok(())
}

#[test]
fn test_eleven_distinct_characters_are_truncated_to_the_cap() -> Result<()> {
    let permutations = permute(Some("abcdefghijk"))?;

    // 11! = 39,916,800 truncated to 10!
    assert_eq!(permutations.len(), MAX_PERMUTATIONS);

    Ok(())
}

#[test]
fn test_capped_results_are_idempotent_in_cardinality() -> Result<()> {
    let config = PermutationConfig {
        max_permutations: 1000,
    };
    let engine = PermutationEngine::with_config(config)?;

    // Membership under truncation is unspecified, cardinality is not.
    let first = engine.permute(Some("abcdefg"))?;
    let second = engine.permute(Some("abcdefg"))?;
    assert_eq!(first.len(), 1000);
    assert_eq!(second.len(), first.len());

    Ok(())
}

#[test]
fn test_multi_word_input_fails_without_partial_results() {
    let result = permute(Some("String  containing  spaces"));

    match result {
        Err(WordpermError::MultiWordInput(word)) => {
            assert_eq!(word, "String  containing  spaces");
        }
        other => panic!("Expected MultiWordInput, got {other:?}"),
    }
}
