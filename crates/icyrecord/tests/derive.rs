use icyrecord::prelude::*;

// ---- fixtures ----------------------------------------------------------

#[allow(clippy::trivially_copy_pass_by_ref)]
fn non_negative(age: &i64) -> bool {
    *age >= 0
}

#[allow(clippy::ptr_arg)]
fn not_blank(name: &String) -> bool {
    !name.trim().is_empty()
}

#[derive(Clone, Debug, PartialEq, Record)]
#[record(name = "Person")]
struct Person {
    #[record(label = "Full name", precondition = "not_blank")]
    name: String,

    #[record(label = "Age in years", precondition = "non_negative")]
    age: i64,

    nickname: Option<String>,
}

#[derive(Debug, PartialEq, Record)]
struct Measurement {
    #[record(rename = "value")]
    reading: f64,
    tags: Vec<String>,
    raw: Value,
}

fn ada() -> Person {
    Person {
        name: "Ada".to_string(),
        age: 36,
        nickname: None,
    }
}

// ---- tests -------------------------------------------------------------

#[test]
fn derived_type_is_built_once() {
    let a = Person::record_type();
    let b = Person::record_type();

    assert!(a.same_type(&b));
    assert_eq!(a.name(), "Person");
    assert_eq!(a.field_count(), 3);
}

#[test]
fn derived_schema_carries_kinds_and_labels() {
    let snapshot = Person::record_type().snapshot();
    let fields: Vec<_> = snapshot
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.kind.as_deref(), f.label.as_deref(), f.has_precondition))
        .collect();

    assert_eq!(
        fields,
        vec![
            ("name", Some("Text"), Some("Full name"), true),
            ("age", Some("Int"), Some("Age in years"), true),
            ("nickname", None, None, false),
        ]
    );
    assert_eq!(
        serde_json::to_value(&snapshot).unwrap()["lineage"],
        serde_json::json!(["Person"])
    );
}

#[test]
fn create_round_trips_through_validation() {
    let record = ada().create().unwrap();

    assert_eq!(record.get("name").unwrap(), &Value::Text("Ada".into()));
    assert_eq!(record.get("nickname").unwrap(), &Value::Null);
    assert_eq!(Person::from_record(&record).unwrap(), ada());
}

#[test]
fn create_enforces_preconditions() {
    let mut person = ada();
    person.age = -1;

    let err = person.create().unwrap_err();
    assert_eq!(
        err,
        RecordError::PreconditionViolated {
            record: "Person".into(),
            field: "age".into(),
        }
    );

    let mut person = ada();
    person.name = "   ".into();
    assert_eq!(person.create().unwrap_err().class(), ErrorClass::Precondition);
}

#[test]
fn from_args_validates_dynamic_input() {
    let person = Person::from_args(args! {
        "name" => "Grace",
        "age" => 85,
        "nickname" => "Amazing Grace",
    })
    .unwrap();

    assert_eq!(person.nickname.as_deref(), Some("Amazing Grace"));

    let err = Person::from_args(args! { "name" => "Grace", "age" => "85", "nickname" => () })
        .unwrap_err();
    assert!(matches!(err, RecordError::TypeMismatch { ref field, .. } if field == "age"));

    let err = Person::from_args(args! { "name" => "Grace" }).unwrap_err();
    assert!(matches!(err, RecordError::MissingAttribute { .. }));
}

#[test]
fn derived_records_are_write_once() {
    let mut record = ada().create().unwrap();

    assert!(matches!(
        record.set("age", 40),
        Err(RecordError::ReadOnlyViolation { .. })
    ));
    assert_eq!(record.get_as::<i64>("age").unwrap(), 36);
}

#[test]
fn rename_and_default_name() {
    let ty = Measurement::record_type();

    assert_eq!(ty.name(), "Measurement");
    assert!(ty.has_field("value"));
    assert!(!ty.has_field("reading"));

    let m = Measurement {
        reading: 2.5,
        tags: vec!["lab".into()],
        raw: Value::Blob(vec![1, 2]),
    };
    let record = m.create().unwrap();

    assert_eq!(record.get("value").unwrap(), &Value::Float(2.5));
    assert_eq!(
        record.to_string(),
        "Measurement(\n  value=2.5\n  tags=['lab']\n  raw=0x0102\n)"
    );
    assert_eq!(
        Measurement::from_record(&record).unwrap().tags,
        vec!["lab".to_string()]
    );
}

#[test]
fn derived_type_renders_template() {
    assert_eq!(
        Person::record_type().to_string(),
        "Person(\n  # Full name\n  name='{__name}'\n  # Age in years\n  age={__age}\n  nickname={__nickname}\n)"
    );
    assert_eq!(
        ada().create().unwrap().to_string(),
        "Person(\n  # Full name\n  name='Ada'\n  # Age in years\n  age=36\n  nickname=null\n)"
    );
}

#[test]
fn derived_type_can_be_extended_dynamically() {
    let employee = RecordType::builder("Employee")
        .extends(&Person::record_type())
        .field("company", Kind::Text)
        .build()
        .unwrap();

    let record = employee
        .construct(args! {
            "name" => "Ada",
            "age" => 36,
            "nickname" => (),
            "company" => "Analytical Engines",
        })
        .unwrap();

    assert!(employee.is_subtype_of(&Person::record_type()));
    assert_eq!(record.get_as::<String>("company").unwrap(), "Analytical Engines");
}
