#[macro_use]
extern crate arraymap;
extern crate itertools;

use itertools::Itertools;

use arraymap::ArrayMap;
use KnownState::*;

#[test]
fn test_insertion_order() {
    let map = important_cities();
    assert_eq!(map.len(), 3);
    for (position, &state) in IMPORTANT_STATES.iter().enumerate() {
        assert_eq!(map.get_at(position), (&state, &state.city()));
        assert_eq!(map.position(&state), Some(position));
    }
    assert_eq!(map.keys(), IMPORTANT_STATES);
}

#[test]
fn test_overwrite() {
    let mut map = important_cities();
    assert_eq!(map.put(California, "San Diego"), Some("Los Angeles"));
    assert_eq!(map.len(), 3);
    assert_eq!(map.position(&California), Some(1));
    assert_eq!(map.get_at(1), (&California, &"San Diego"));
    assert_eq!(map.put(NewMexico, "Albuquerque"), None);
    assert_eq!(map.len(), 4);
    assert_eq!(map.get_at(3), (&NewMexico, &"Albuquerque"));
}

#[test]
fn test_get() {
    let map = important_cities();
    for state in IMPORTANT_STATES {
        state.check_city(&map);
        assert!(map.contains_key(state));
    }
    check_missing(TINY_STATES, &map);
    for state in TINY_STATES {
        assert!(!map.contains_key(state));
        assert_eq!(map.position(state), None);
    }
}

#[test]
fn test_fetch() {
    let map = important_cities();
    assert_eq!(map.fetch(&Arizona), "Phoenix");
    assert_eq!(map.fetch(&NorthDakota), "");
    let numbers = arraymap! { "one" => 1, "two" => 2 };
    assert_eq!(numbers.fetch("two"), 2);
    assert_eq!(numbers.fetch("three"), 0);
}

#[test]
fn test_get_mut() {
    let mut map = important_cities();
    *map.get_mut(&NewYork).unwrap() = "Buffalo";
    assert_eq!(map[&NewYork], "Buffalo");
    assert_eq!(map.get_mut(&NewMexico), None);
    {
        let (&state, city) = map.get_at_mut(0);
        assert_eq!(state, Arizona);
        *city = "Tucson";
    }
    assert_eq!(map.get(&Arizona), Some(&"Tucson"));
}

#[test]
fn test_index() {
    let map = important_cities();

    for state in IMPORTANT_STATES {
        assert_eq!(map[state], state.city());
    }
}

#[test]
#[should_panic]
fn test_index_nonexistent() {
    let map = important_cities();

    let _city = map[&NorthDakota];
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_at_past_end() {
    let map = important_cities();
    map.get_at(map.len());
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_at_negative() {
    let map = important_cities();
    // The closest thing to `-1` for a `usize` position
    map.get_at(0usize.wrapping_sub(1));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_at_empty() {
    let map = ArrayMap::<KnownState, &'static str>::new();
    map.get_at(0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_at_mut_past_end() {
    let mut map = important_cities();
    map.get_at_mut(3);
}

#[test]
fn test_put_all_truncates() {
    let mut map = ArrayMap::new();
    map.put(NorthDakota, "Fargo");
    map.put_all(vec![Arizona, California, NewYork], vec!["Phoenix", "Los Angeles"]);
    assert_eq!(map.len(), 3);
    assert!(!map.contains_key(&NewYork));
    assert_eq!(map.keys(), &[NorthDakota, Arizona, California]);

    map.put_all(vec![NewMexico], vec!["Albuquerque", "Santa Fe", "Roswell"]);
    assert_eq!(map.len(), 4);
    assert_eq!(map[&NewMexico], "Albuquerque");
}

#[test]
fn test_from_pairs() {
    let map = ArrayMap::from_pairs(
        IMPORTANT_STATES.iter().cloned(),
        IMPORTANT_STATES.iter().map(KnownState::city)
    );
    assert_eq!(map, important_cities());

    let truncated = ArrayMap::from_pairs(ALL_STATES.iter().cloned(), vec!["Phoenix"]);
    assert_eq!(truncated.len(), 1);
    assert_eq!(truncated.get_at(0), (&Arizona, &"Phoenix"));
}

#[test]
fn test_merge() {
    let mut map = arraymap! {
        NewMexico => "Santa Fe",
        California => "San Diego"
    };
    map.merge(important_cities());

    assert_eq!(map.len(), 4);
    // California keeps its original position but takes the new value
    assert_eq!(map.keys(), &[NewMexico, California, Arizona, NewYork]);
    assert_eq!(map[&California], "Los Angeles");
    assert_eq!(map[&NewMexico], "Santa Fe");
}

#[test]
fn test_extend_ref() {
    let important = important_cities();
    let mut all = ArrayMap::new();
    all.put(NewMexico, "Albuquerque");
    all.put(NorthDakota, "Fargo");

    all.extend(&important);

    assert_eq!(all.len(), 5);
    assert_eq!(*all.keys().first().unwrap(), NewMexico);
    check_cities(ALL_STATES, &all);
    // The source is untouched
    assert_eq!(important.len(), 3);
}

#[test]
fn test_from_iter() {
    let xs = [(California, "San Diego"), (NewYork, "New York"), (Arizona, "Phoenix")];

    let map: ArrayMap<_, _> = xs.iter().cloned().collect();

    for &(k, v) in &xs {
        assert_eq!(map.get(&k), Some(&v));
    }
    assert_eq!(map.keys(), &[California, NewYork, Arizona]);
    check_missing(TINY_STATES, &map);
}

#[test]
fn test_eq_is_ordered() {
    let first = important_cities();
    let same = important_cities();
    let reversed = important_cities().into_iter().rev().collect::<ArrayMap<_, _>>();

    assert_eq!(first, same);
    assert_ne!(first, reversed);
    assert_eq!(first.clone(), first);

    let mut longer = important_cities();
    longer.put(NorthDakota, "Fargo");
    assert_ne!(first, longer);
    let mut changed = important_cities();
    changed.put(NewYork, "Buffalo");
    assert_ne!(first, changed);
}

#[test]
fn test_iter() {
    let mut map = important_cities();
    let entries = map.iter().map(|(&state, &city)| (state, city)).collect_vec();
    assert_eq!(entries, IMPORTANT_STATES.iter().map(|&state| (state, state.city())).collect_vec());
    assert_eq!(map.iter().len(), 3);
    assert_eq!(map.iter().next_back(), Some((&NewYork, &"New York City")));

    for (_, city) in &mut map {
        *city = "Springfield";
    }
    assert!(map.values().iter().all(|&city| city == "Springfield"));
    map.values_mut()[0] = "Flagstaff";
    assert_eq!(map[&Arizona], "Flagstaff");
}

#[test]
fn test_clear() {
    let mut map = important_cities();
    map.clear();
    assert!(map.is_empty());
    check_missing(ALL_STATES, &map);
    map.put(NorthDakota, "Fargo");
    assert_eq!(map.get_at(0), (&NorthDakota, &"Fargo"));
}

#[test]
fn test_debug() {
    let map = arraymap! { "b" => 2, "a" => 1 };
    assert_eq!(format!("{:?}", map), r#"{"b": 2, "a": 1}"#);
    let raw = format!("{:?}", map.raw_debug());
    assert!(raw.starts_with(r#"ArrayMap { keys: ["b", "a"], values: [2, 1], index: {"#), "{}", raw);
}

#[test]
fn test_scenario() {
    let mut map = ArrayMap::new();
    map.put("A", 1);
    map.put("B", 2);
    map.put("C", 3);
    map.put("D", 4);
    assert_eq!(map.len(), 4);
    assert_eq!(map.get_at(0), (&"A", &1));
    assert_eq!(map.get_at(3), (&"D", &4));

    map.delete(&["A", "C"]);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get_at(0), (&"B", &2));
    assert_eq!(map.get_at(1), (&"D", &4));
    assert_eq!(map.get("A"), None);
    assert_eq!(map.fetch("A"), 0);
}

#[test]
fn test_wrapper_keys() {
    let data = arraymap! {
        ExampleWrapper(32) => "abc",
        ExampleWrapper(42) => "life",
    };
    assert_eq!(data[&ExampleWrapper(32)], "abc");
    assert_eq!(data[&ExampleWrapper(42)], "life");
    assert_eq!(data.get(&ExampleWrapper(76)), None)
}

#[test]
fn test_borrowed_lookup() {
    let mut data: ArrayMap<String, usize> = ArrayMap::new();
    data.put("life".to_owned(), 42);
    data.put("abc".to_owned(), 3);
    assert_eq!(data.get("life"), Some(&42));
    assert_eq!(data["abc"], 3);
    assert_eq!(data.delete(["abc", "xyz"].iter().cloned()), 1);
    assert_eq!(data.keys(), &["life".to_owned()]);
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ExampleWrapper(u16);

/// List the biggest cities in each state except for `NewMexico` and `NorthDakota`,
/// intentionally excluding them to provide a better test case.
fn important_cities() -> ArrayMap<KnownState, &'static str> {
    arraymap! {
        Arizona => "Phoenix",
        California => "Los Angeles",
        NewYork => "New York City"
    }
}
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
enum KnownState {
    Arizona,
    California,
    NewMexico,
    NewYork,
    NorthDakota
}
fn check_missing(states: &[KnownState], target: &ArrayMap<KnownState, &'static str>) {
    for state in states {
        state.check_missing(target);
    }
}
fn check_cities(states: &[KnownState], target: &ArrayMap<KnownState, &'static str>) {
    for state in states {
        state.check_city(target);
    }
}
static ALL_STATES: &[KnownState] = &[Arizona, California, NewMexico, NewYork, NorthDakota];
static IMPORTANT_STATES: &[KnownState] = &[Arizona, California, NewYork];
static TINY_STATES: &[KnownState] = &[NorthDakota, NewMexico];
impl KnownState {
    fn city(&self) -> &'static str {
        match *self {
            Arizona => "Phoenix",
            California => "Los Angeles",
            NewMexico => "Albuquerque",
            NewYork => "New York City",
            NorthDakota => "Fargo"
        }
    }
    fn check_missing(self, target: &ArrayMap<KnownState, &'static str>) {
        assert_eq!(target.get(&self), None, "Expected no city for {:?}", self);
    }
    fn check_city(self, target: &ArrayMap<KnownState, &'static str>) {
        assert_eq!(target.get(&self), Some(&self.city()), "Unexpected city for {:?}", self);
    }
}
