use std::fs;

use tempfile::TempDir;

use showroom::{
    core::store::{InventorySnapshot, StoreError},
    persist::{InventorySink, PersistError, PersistResult, json::JsonFileSink},
    showroom::{Showroom, ShowroomConfig},
    vehicle::VehicleDraft,
};

fn draft(make: &str, model: &str, year: &str) -> VehicleDraft {
    VehicleDraft::new(make, model, year, "Silver", "12500.75")
}

fn open(tmp: &TempDir, file: &str) -> Showroom {
    Showroom::from_config(&ShowroomConfig {
        name: "Test Motors".to_string(),
        data_file: tmp.path().join(file),
    })
}

struct BrokenSink;

impl InventorySink for BrokenSink {
    fn load(&mut self) -> PersistResult<Option<InventorySnapshot>> {
        Ok(None)
    }

    fn save(&mut self, _snapshot: &InventorySnapshot) -> PersistResult<()> {
        Err(std::io::Error::other("disk full").into())
    }
}

#[test]
fn missing_file_starts_empty_without_warning() {
    let tmp = TempDir::new().expect("tmp");
    let room = open(&tmp, "absent.json");

    assert!(room.store().is_empty());
    assert!(room.load_warning().is_none());
    assert_eq!(room.store().next_id(), 1);
    assert!(!tmp.path().join("absent.json").exists());
}

#[test]
fn save_then_reload_round_trips_content_and_order() {
    let tmp = TempDir::new().expect("tmp");

    let mut room = open(&tmp, "inv.json");
    room.add(&draft("Toyota", "Corolla", "2020")).expect("add1");
    room.add(&draft("Honda", "Civic", "2018")).expect("add2");
    let saved = room.add(&draft("Ford", "Focus", "2012")).expect("add3");
    assert!(saved.is_durable());
    room.sell("2").expect("sell");
    let before = room.store().export_snapshot();
    drop(room);

    let reopened = open(&tmp, "inv.json");
    assert!(reopened.load_warning().is_none());
    assert_eq!(reopened.store().export_snapshot(), before);
    assert_eq!(reopened.store().next_id(), 4);
}

#[test]
fn ids_continue_from_loaded_max() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(
        tmp.path().join("inv.json"),
        r#"{"inventory": [
            {"car_id": 7, "make": "Audi", "model": "A4", "year": 2011,
             "color": "Black", "price": 9900, "is_sold": true},
            {"car_id": 3, "make": "Fiat", "model": "500", "year": 2014,
             "color": "Yellow", "price": 6500.5, "is_sold": false}
        ]}"#,
    )
    .expect("write fixture");

    let mut room = open(&tmp, "inv.json");
    assert_eq!(room.store().len(), 2);
    assert!(room.store().get(7).expect("audi").is_sold);

    let saved = room.add(&draft("Seat", "Ibiza", "2016")).expect("add");
    assert_eq!(saved.value, 8);
}

#[test]
fn backing_file_uses_documented_field_names() {
    let tmp = TempDir::new().expect("tmp");
    let mut room = open(&tmp, "inv.json");
    room.add(&VehicleDraft::new("Toyota", "Corolla", "2020", "Blue", "18000"))
        .expect("add");

    let raw = fs::read_to_string(tmp.path().join("inv.json")).expect("read");
    let doc: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let car = &doc["inventory"][0];
    assert_eq!(car["car_id"], 1);
    assert_eq!(car["make"], "Toyota");
    assert_eq!(car["model"], "Corolla");
    assert_eq!(car["year"], 2020);
    assert_eq!(car["color"], "Blue");
    assert_eq!(car["price"], 18000.0);
    assert_eq!(car["is_sold"], false);
    assert!(raw.contains("\n    \"inventory\""));
}

#[test]
fn non_list_inventory_falls_back_to_empty_with_warning() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("inv.json"), r#"{"inventory": "not-a-list"}"#).expect("write");

    let room = open(&tmp, "inv.json");
    assert!(room.store().is_empty());
    assert!(matches!(room.load_warning(), Some(PersistError::Malformed(_))));
}

#[test]
fn malformed_documents_fall_back_to_empty() {
    let fixtures = [
        "this is not json",
        r#"{"cars": []}"#,
        r#"[1, 2, 3]"#,
        r#"{"inventory": [{"car_id": 1, "make": "Audi"}]}"#,
        "[[]]",
        r#"[[{"car_id": 5, "make": "Audi", "model": "A4", "year": 2011,
              "color": "Black", "price": 9900, "is_sold": false}]]"#,
        r#""inventory""#,
    ];

    for (i, body) in fixtures.iter().enumerate() {
        let tmp = TempDir::new().expect("tmp");
        let name = format!("bad{i}.json");
        fs::write(tmp.path().join(&name), body).expect("write");

        let room = open(&tmp, &name);
        assert!(room.store().is_empty(), "fixture {i}");
        assert!(
            matches!(room.load_warning(), Some(PersistError::Malformed(_))),
            "fixture {i}"
        );
    }
}

#[test]
fn duplicate_ids_fall_back_to_empty() {
    let tmp = TempDir::new().expect("tmp");
    let car = r#"{"car_id": 1, "make": "Audi", "model": "A4", "year": 2011,
                  "color": "Black", "price": 9900, "is_sold": false}"#;
    fs::write(
        tmp.path().join("inv.json"),
        format!(r#"{{"inventory": [{car}, {car}]}}"#),
    )
    .expect("write");

    let room = open(&tmp, "inv.json");
    assert!(room.store().is_empty());
    assert!(matches!(room.load_warning(), Some(PersistError::Inconsistent(_))));
}

#[test]
fn unreadable_path_falls_back_to_empty() {
    let tmp = TempDir::new().expect("tmp");
    fs::create_dir(tmp.path().join("inv.json")).expect("mkdir");

    let room = open(&tmp, "inv.json");
    assert!(room.store().is_empty());
    assert!(matches!(room.load_warning(), Some(PersistError::Io(_))));
}

#[test]
fn failed_save_keeps_in_memory_state() {
    let mut room = Showroom::open("Offline", Box::new(BrokenSink));

    let saved = room.add(&draft("Toyota", "Yaris", "2017")).expect("add");
    assert_eq!(saved.value, 1);
    assert!(!saved.is_durable());
    assert!(matches!(saved.save_warning, Some(PersistError::Io(_))));
    assert_eq!(room.store().len(), 1);

    let sold = room.sell_id(1).expect("sell");
    assert!(!sold.is_durable());
    assert!(room.store().get(1).expect("yaris").is_sold);
}

#[test]
fn json_sink_loads_none_until_first_save() {
    let tmp = TempDir::new().expect("tmp");
    let mut sink = JsonFileSink::new(tmp.path().join("inv.json"));
    assert!(sink.load().expect("load").is_none());

    let snapshot = InventorySnapshot::default();
    sink.save(&snapshot).expect("save");
    assert_eq!(sink.load().expect("reload"), Some(snapshot));
}

#[test]
fn max_id_in_file_is_rejected_instead_of_overflowing() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(
        tmp.path().join("inv.json"),
        format!(
            r#"{{"inventory": [{{"car_id": {}, "make": "Audi", "model": "A4", "year": 2011,
                "color": "Black", "price": 9900, "is_sold": false}}]}}"#,
            u64::MAX
        ),
    )
    .expect("write");

    let mut room = open(&tmp, "inv.json");
    assert!(room.store().is_empty());
    assert!(matches!(
        room.load_warning(),
        Some(PersistError::Inconsistent(StoreError::IdsExhausted(u64::MAX)))
    ));

    let saved = room.add(&draft("Seat", "Leon", "2018")).expect("add");
    assert_eq!(saved.value, 1);
}

#[test]
fn add_after_second_highest_id_reports_exhaustion() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(
        tmp.path().join("inv.json"),
        format!(
            r#"{{"inventory": [{{"car_id": {}, "make": "Audi", "model": "A4", "year": 2011,
                "color": "Black", "price": 9900, "is_sold": false}}]}}"#,
            u64::MAX - 1
        ),
    )
    .expect("write");

    let mut room = open(&tmp, "inv.json");
    assert!(room.load_warning().is_none());

    let err = room.add(&draft("Seat", "Leon", "2018")).unwrap_err();
    assert_eq!(err, StoreError::IdsExhausted(u64::MAX));
    assert_eq!(room.store().len(), 1);

    let reopened = open(&tmp, "inv.json");
    assert_eq!(reopened.store().len(), 1);
}
