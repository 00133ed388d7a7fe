//! Set hygiene for ordered address lists.
//!
//! The candidate and validator lists inside the payload are conceptually
//! sets but carried as ordered sequences; the consensus layer runs these
//! helpers while composing them so the payload never holds duplicates.
//! All three are pure: inputs are never mutated.

use std::collections::HashSet;

use crate::types::Address;

/// Whether `addr` appears in the list. Linear scan, exact match.
pub fn contains(addresses: &[Address], addr: &Address) -> bool {
    addresses.iter().any(|a| a == addr)
}

/// Drop later duplicates, preserving first-occurrence order.
///
/// Lists of length <= 1 are returned as the input vector itself, without a
/// fresh allocation; callers must not rely on the result aliasing (or not
/// aliasing) its input beyond that.
pub fn distinct(addresses: Vec<Address>) -> Vec<Address> {
    if addresses.len() <= 1 {
        return addresses;
    }

    let mut seen = HashSet::with_capacity(addresses.len());
    let mut result = Vec::with_capacity(addresses.len());
    for address in addresses {
        if seen.insert(address) {
            result.push(address);
        }
    }
    result
}

/// A copy of the list with every occurrence of `addr` removed, relative
/// order of the rest preserved.
pub fn remove(addresses: &[Address], addr: &Address) -> Vec<Address> {
    addresses
        .iter()
        .filter(|a| *a != addr)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn addr(byte: u8) -> Address {
        Address::from_bytes([byte; 20])
    }

    #[test]
    fn test_contains() {
        let list = vec![addr(1), addr(2), addr(3)];
        assert!(contains(&list, &addr(2)));
        assert!(!contains(&list, &addr(4)));
        assert!(!contains(&[], &addr(1)));
    }

    #[test]
    fn test_distinct_drops_later_duplicates() {
        let list = vec![addr(1), addr(2), addr(1), addr(3)];
        assert_eq!(distinct(list), vec![addr(1), addr(2), addr(3)]);
    }

    #[test]
    fn test_distinct_short_lists_pass_through() {
        assert_eq!(distinct(vec![]), Vec::<Address>::new());
        assert_eq!(distinct(vec![addr(7)]), vec![addr(7)]);
    }

    #[test]
    fn test_remove_all_occurrences() {
        let list = vec![addr(1), addr(2), addr(1), addr(3)];
        assert_eq!(remove(&list, &addr(1)), vec![addr(2), addr(3)]);
    }

    #[test]
    fn test_remove_scenario() {
        let list = vec![addr(1), addr(2), addr(3)];
        assert_eq!(remove(&list, &addr(2)), vec![addr(1), addr(3)]);
    }

    #[test]
    fn test_remove_non_member_is_identity() {
        let list = vec![addr(1), addr(2)];
        assert_eq!(remove(&list, &addr(9)), list);
    }

    fn address_list() -> impl Strategy<Value = Vec<Address>> {
        // Narrow byte range to force collisions.
        prop::collection::vec((0u8..8).prop_map(addr), 0..32)
    }

    proptest! {
        #[test]
        fn prop_distinct_is_idempotent(list in address_list()) {
            let once = distinct(list);
            let twice = distinct(once.clone());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_distinct_preserves_first_occurrence_order(list in address_list()) {
            let deduped = distinct(list.clone());

            // No duplicates left.
            let unique: HashSet<_> = deduped.iter().copied().collect();
            prop_assert_eq!(unique.len(), deduped.len());

            // Order matches the first occurrence of each address.
            let mut expected = Vec::new();
            for a in &list {
                if !expected.contains(a) {
                    expected.push(*a);
                }
            }
            prop_assert_eq!(deduped, expected);
        }

        #[test]
        fn prop_remove_eliminates_membership(list in address_list(), byte in 0u8..8) {
            let target = addr(byte);
            let removed = remove(&list, &target);
            prop_assert!(!contains(&removed, &target));
        }

        #[test]
        fn prop_remove_non_member_is_identity(list in address_list()) {
            let outsider = addr(0xff);
            prop_assert_eq!(remove(&list, &outsider), list);
        }
    }
}
