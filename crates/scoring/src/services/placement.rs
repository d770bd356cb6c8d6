/// Places for an already ordered list. Items with equal keys share a place,
/// and the next distinct key is placed at one plus the number of items ahead
/// of it, so a three-way tie for first is followed by fourth.
pub fn tie_aware_places<T, K, F>(ordered: &[T], key: F) -> Vec<u32>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut places = Vec::with_capacity(ordered.len());
    let mut previous: Option<K> = None;
    let mut place = 0u32;

    for (index, item) in ordered.iter().enumerate() {
        let current = key(item);
        if previous.as_ref() != Some(&current) {
            place = u32::try_from(index + 1).unwrap_or(u32::MAX);
        }
        places.push(place);
        previous = Some(current);
    }

    places
}

/// Splits an ordered list into runs of equal keys.
pub fn tie_groups<T, K, F>(ordered: &[T], key: F) -> Vec<&[T]>
where
    K: PartialEq,
    F: Fn(&T) -> K,
{
    let mut groups = Vec::new();
    let mut start = 0;

    for index in 1..=ordered.len() {
        if index == ordered.len() || key(&ordered[index]) != key(&ordered[start]) {
            groups.push(&ordered[start..index]);
            start = index;
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_places_skip_after_ties() {
        let weights = [30, 30, 30, 20, 10, 10, 5];
        assert_eq!(tie_aware_places(&weights, |w| *w), vec![1, 1, 1, 4, 5, 5, 7]);
    }

    #[test]
    fn test_places_empty() {
        let empty: [i32; 0] = [];
        assert!(tie_aware_places(&empty, |w| *w).is_empty());
        assert!(tie_groups(&empty, |w| *w).is_empty());
    }

    #[test]
    fn test_groups_follow_equal_keys() {
        let weights = [9, 9, 7, 6, 6, 6];
        let groups = tie_groups(&weights, |w| *w);
        assert_eq!(groups, vec![&[9, 9][..], &[7][..], &[6, 6, 6][..]]);
    }
}
