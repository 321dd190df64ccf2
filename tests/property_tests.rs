use huffcode::huffman_coding::node::Node;
use huffcode::{build_code_mapping, build_tree, decode, encode, FrequencyTable};
use proptest::prelude::*;

/// Optimal total code length computed independently: repeatedly join the two smallest
/// weights in a sorted list and add each join to the cost.
fn reference_cost(mut weights: Vec<usize>) -> usize {
    let mut cost = 0;
    while weights.len() > 1 {
        weights.sort_unstable_by(|a, b| b.cmp(a));
        let a = weights.pop().unwrap();
        let b = weights.pop().unwrap();
        cost += a + b;
        weights.push(a + b);
    }
    cost
}

fn check_weights(node: &Node<u8>) -> bool {
    match node.kids() {
        None => node.weight >= 1,
        Some((left, right)) => {
            node.weight == left.weight + right.weight && check_weights(left) && check_weights(right)
        }
    }
}

proptest! {
    #[test]
    fn test_roundtrip_bytes(input in prop::collection::vec(any::<u8>(), 1..300)) {
        let tree = build_tree(input.iter().copied()).unwrap();
        let mapping = build_code_mapping(&tree);
        let bits = encode(&input, &mapping).unwrap();
        prop_assert_eq!(decode(&bits, &tree).unwrap(), input);
    }

    #[test]
    fn test_roundtrip_text(text in "\\PC{1,120}") {
        let symbols: Vec<char> = text.chars().collect();
        let tree = build_tree(symbols.iter().copied()).unwrap();
        let bits = encode(&symbols, &build_code_mapping(&tree)).unwrap();
        let decoded: String = decode(&bits, &tree).unwrap().into_iter().collect();
        prop_assert_eq!(decoded, text);
    }

    #[test]
    fn test_prefix_free(input in prop::collection::vec(0..12u8, 2..200)) {
        prop_assume!(input.iter().any(|&s| s != input[0]));
        let mapping = build_code_mapping(&build_tree(input.iter().copied()).unwrap());
        let codes: Vec<_> = mapping.iter().map(|(_, code)| code.clone()).collect();
        for (i, a) in codes.iter().enumerate() {
            prop_assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    prop_assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_weight_invariant(input in prop::collection::vec(0..40u8, 1..300)) {
        let tree = build_tree(input.iter().copied()).unwrap();
        prop_assert_eq!(tree.weight(), input.len());
        prop_assert!(check_weights(tree.root()));
        let distinct = FrequencyTable::count(input.iter().copied()).len();
        prop_assert_eq!(tree.leaf_count(), distinct);
    }

    #[test]
    fn test_optimal_length(input in prop::collection::vec(0..20u8, 1..400)) {
        let freqs = FrequencyTable::count(input.iter().copied());
        let tree = build_tree(input.iter().copied()).unwrap();
        let mapping = build_code_mapping(&tree);
        let bits = encode(&input, &mapping).unwrap();

        let expected = if freqs.len() == 1 {
            input.len()
        } else {
            reference_cost(freqs.iter().map(|(_, count)| count).collect())
        };
        prop_assert_eq!(bits.len(), expected);
        prop_assert_eq!(mapping.encoded_len(&freqs), expected);
        prop_assert_eq!(tree.weighted_path_length(), expected);
    }

    #[test]
    fn test_deterministic(input in prop::collection::vec(0..8u8, 1..100)) {
        let a = build_tree(input.iter().copied()).unwrap();
        let b = build_tree(input.iter().copied()).unwrap();
        prop_assert_eq!(&a, &b);
        let codes_a: Vec<_> = build_code_mapping(&a).iter().map(|(s, c)| (*s, c.clone())).collect();
        let codes_b: Vec<_> = build_code_mapping(&b).iter().map(|(s, c)| (*s, c.clone())).collect();
        prop_assert_eq!(codes_a, codes_b);
    }
}
