//! List behavior checked over generated inputs

use activity_list::persistence::{decode_list, encode_list};
use activity_list::{
    ACTIVITY_TYPES, ActivityListStore, ActivityRecord, ActivityType, Hydration, KeyValueStorage,
    MemoryStorage, StoreConfig,
};
use proptest::prelude::*;

fn activity_type() -> impl Strategy<Value = ActivityType> {
    prop_oneof![
        4 => (0..ACTIVITY_TYPES.len()).prop_map(|i| ActivityType::from_label(ACTIVITY_TYPES[i])),
        1 => "[A-Za-z]{1,10}".prop_map(|s| ActivityType::from_label(&s)),
        // Labels with padding or odd casing, built directly
        1 => "[ ]{0,2}[A-Za-z]{1,10}[ ]{0,2}".prop_map(ActivityType::Other),
        1 => (0..ACTIVITY_TYPES.len(), any::<bool>()).prop_map(|(i, upper)| {
            let label = ACTIVITY_TYPES[i];
            let cased = if upper { label.to_uppercase() } else { label.to_lowercase() };
            ActivityType::Other(format!(" {cased}"))
        }),
    ]
}

/// Records that pass the insertion check
fn valid_record() -> impl Strategy<Value = ActivityRecord> {
    (
        "[A-Za-z][A-Za-z ]{0,20}",
        0.01f64..10_000.0,
        activity_type(),
        any::<bool>(),
        0u8..=10,
    )
        .prop_map(|(activity, price, kind, booking, steps)| {
            ActivityRecord::new(activity, price, kind)
                .with_booking(booking)
                .with_accessibility(f64::from(steps) / 10.0)
        })
}

/// Records that fail it: blank label or non-positive price
fn invalid_record() -> impl Strategy<Value = ActivityRecord> {
    prop_oneof![
        ("[ \t]{0,5}", 0.01f64..100.0)
            .prop_map(|(blank, price)| ActivityRecord::new(blank, price, ActivityType::Social)),
        ("[A-Za-z]{1,10}", -100.0f64..=0.0)
            .prop_map(|(name, price)| ActivityRecord::new(name, price, ActivityType::Social)),
    ]
}

fn store_with(items: &[ActivityRecord]) -> ActivityListStore<MemoryStorage> {
    let mut storage = MemoryStorage::new();
    storage
        .set_item("tasks", &encode_list(items).unwrap())
        .unwrap();
    let (store, hydration) = ActivityListStore::open(storage, StoreConfig::default());
    assert_eq!(hydration, Hydration::Restored { count: items.len() });
    store
}

fn reload(store: ActivityListStore<MemoryStorage>) -> Vec<ActivityRecord> {
    let (reloaded, _) = ActivityListStore::open(store.into_storage(), StoreConfig::default());
    reloaded.items().to_vec()
}

proptest! {
    #[test]
    fn add_appends_valid_records(
        existing in prop::collection::vec(valid_record(), 0..8),
        candidate in valid_record(),
    ) {
        let mut store = store_with(&existing);
        store.add(candidate.clone()).unwrap();

        prop_assert_eq!(store.count(), existing.len() + 1);
        prop_assert_eq!(&store.items()[..existing.len()], existing.as_slice());
        prop_assert_eq!(store.items().last(), Some(&candidate));

        let after = store.items().to_vec();
        prop_assert_eq!(reload(store), after);
    }

    #[test]
    fn add_rejects_invalid_records(
        existing in prop::collection::vec(valid_record(), 0..8),
        candidate in invalid_record(),
    ) {
        let mut store = store_with(&existing);
        prop_assert!(store.add(candidate).is_err());
        prop_assert_eq!(store.count(), existing.len());
        prop_assert_eq!(store.items(), existing.as_slice());
        prop_assert_eq!(reload(store), existing);
    }

    #[test]
    fn remove_shifts_later_records(
        (existing, index) in prop::collection::vec(valid_record(), 1..10)
            .prop_flat_map(|items| {
                let len = items.len();
                (Just(items), 0..len)
            }),
    ) {
        let mut store = store_with(&existing);
        let removed = store.remove(index).unwrap();

        prop_assert_eq!(&removed, &existing[index]);
        prop_assert_eq!(store.count(), existing.len() - 1);
        prop_assert_eq!(&store.items()[..index], &existing[..index]);
        prop_assert_eq!(&store.items()[index..], &existing[index + 1..]);

        let after = store.items().to_vec();
        prop_assert_eq!(reload(store), after);
    }

    #[test]
    fn encoded_list_decodes_to_same_list(items in prop::collection::vec(valid_record(), 0..10)) {
        let json = encode_list(&items).unwrap();
        let decoded = decode_list(&json).unwrap();
        prop_assert_eq!(decoded.skipped, 0);
        prop_assert_eq!(decoded.items, items);
    }

    #[test]
    fn hydrating_twice_gives_same_list(items in prop::collection::vec(valid_record(), 0..10)) {
        let mut storage = MemoryStorage::new();
        storage.set_item("tasks", &encode_list(&items).unwrap()).unwrap();

        let (first, _) = ActivityListStore::open(storage.clone(), StoreConfig::default());
        let (second, _) = ActivityListStore::open(storage, StoreConfig::default());
        prop_assert_eq!(first.items(), second.items());
        prop_assert_eq!(first.items(), items.as_slice());
    }
}

#[test]
fn test_scenario_add_to_empty_store() {
    let (mut store, hydration) =
        ActivityListStore::open(MemoryStorage::new(), StoreConfig::default());
    assert_eq!(hydration, Hydration::Fresh);
    assert_eq!(store.count(), 0);

    let hiking = ActivityRecord::new("Hiking", 20.0, ActivityType::Recreational)
        .with_booking(false)
        .with_accessibility(0.5);
    store.add(hiking.clone()).unwrap();

    assert_eq!(store.count(), 1);
    let raw = store.storage().get_item("tasks").unwrap().unwrap();
    assert_eq!(decode_list(&raw).unwrap().items, vec![hiking]);
}

#[test]
fn test_scenario_blank_activity_rejected() {
    let mut store = store_with(&[ActivityRecord::new("Choir", 5.0, ActivityType::Music)]);
    let blank = ActivityRecord::new("", 10.0, ActivityType::Education);
    assert!(store.add(blank).is_err());
    assert_eq!(store.count(), 1);
}

#[test]
fn test_scenario_remove_middle_of_three() {
    let records: Vec<_> = ["Read", "Bake", "Donate"]
        .iter()
        .zip([ActivityType::Education, ActivityType::Cooking, ActivityType::Charity])
        .map(|(name, kind)| ActivityRecord::new(*name, 10.0, kind))
        .collect();
    let mut store = store_with(&records);

    store.remove(1).unwrap();
    assert_eq!(store.items(), &[records[0].clone(), records[2].clone()]);
    assert_eq!(store.count(), 2);
}

#[test]
fn test_page_data_from_javascript_build() {
    // Exactly what the original page wrote, including its lowercase reset value
    let raw = r#"[{"activity":"Hiking","price":20,"type":"Recreational","bookingRequired":false,"accessibility":0.5},{"activity":"Read","price":3,"type":"education","bookingRequired":true,"accessibility":1}]"#;
    let mut storage = MemoryStorage::new();
    storage.set_item("tasks", raw).unwrap();

    let (store, hydration) = ActivityListStore::open(storage, StoreConfig::default());
    assert_eq!(hydration, Hydration::Restored { count: 2 });
    assert_eq!(store.items()[1].kind.as_str(), "education");
    assert_eq!(store.items()[1].accessibility, 1.0);
}

#[test]
fn test_null_price_from_javascript_build() {
    // The page wrote an Infinity price as null; the other records still load
    let raw = r#"[{"activity":"Hiking","price":20,"type":"Recreational","bookingRequired":false,"accessibility":0.5},{"activity":"Yacht","price":null,"type":"Recreational","bookingRequired":true,"accessibility":0.3},{"activity":"Read","price":3,"type":"Education","bookingRequired":true}]"#;
    let mut storage = MemoryStorage::new();
    storage.set_item("tasks", raw).unwrap();

    let (mut store, hydration) = ActivityListStore::open(storage, StoreConfig::default());
    assert_eq!(hydration, Hydration::Salvaged { count: 2, skipped: 1 });
    assert_eq!(store.items()[0].activity, "Hiking");
    assert_eq!(store.items()[1].activity, "Read");
    assert_eq!(store.items()[1].accessibility, 0.0);

    // The next write stores what survived; the original text stays in the backup
    store.remove(0).unwrap();
    let (reloaded, hydration) =
        ActivityListStore::open(store.into_storage(), StoreConfig::default());
    assert_eq!(hydration, Hydration::Restored { count: 1 });
    let backup = reloaded.storage().get_item("tasks.corrupt").unwrap();
    assert_eq!(backup.as_deref(), Some(raw));
}
