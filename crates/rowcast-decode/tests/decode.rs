#![allow(missing_docs)]

use rowcast_decode::{DecodeError, can_decode, decode, decode_with_schema};
use rowcast_model::{
    CoercionPolicy, CsvRecord, DecodeOptions, Decoded, FieldKind, FieldValue, RecordSchema,
    SchemaError, TargetShape,
};

#[derive(Debug, Default, Clone, PartialEq)]
struct Person {
    name: String,
    age: i64,
}

impl CsvRecord for Person {
    fn schema() -> Result<RecordSchema<Self>, SchemaError> {
        RecordSchema::builder(Person::default)
            .field("Name", FieldKind::Text, |p, v| {
                if let FieldValue::Text(s) = v {
                    p.name = s;
                }
            })
            .field("Age", FieldKind::Integer, |p, v| {
                if let FieldValue::Integer(n) = v {
                    p.age = n;
                }
            })
            .build()
    }
}

fn person(name: &str, age: i64) -> Person {
    Person {
        name: name.to_string(),
        age,
    }
}

fn decode_people(input: &[u8], shape: TargetShape, options: &DecodeOptions) -> Decoded<Person> {
    decode::<Person, _>(input, shape, options).expect("decode should succeed")
}

#[test]
fn header_row_maps_columns_by_field_name() {
    let input = b"Name,Age\nAlice,30\nBob,25\n";
    let people = decode_people(input, TargetShape::List, &DecodeOptions::default());
    assert_eq!(
        people,
        Decoded::List(vec![person("Alice", 30), person("Bob", 25)])
    );
}

#[test]
fn header_column_order_does_not_matter() {
    let input = b"Age,Name\n30,Alice\n";
    let people = decode_people(input, TargetShape::List, &DecodeOptions::default());
    assert_eq!(people.as_slice(), &[person("Alice", 30)]);
}

#[test]
fn positional_mapping_without_header_row() {
    let input = b"Alice,30\n";
    let options = DecodeOptions::default().with_header_row(false);
    let people = decode_people(input, TargetShape::List, &options);
    assert_eq!(people.as_slice(), &[person("Alice", 30)]);
}

#[test]
fn unknown_header_column_is_ignored() {
    let input = b"Name,Unknown\nAlice,999\n";
    let people = decode_people(input, TargetShape::List, &DecodeOptions::default());
    assert_eq!(people.as_slice(), &[person("Alice", 0)]);
}

#[test]
fn short_line_leaves_trailing_fields_default() {
    let input = b"Name,Age\nAlice\nBob,25\n";
    let people = decode_people(input, TargetShape::List, &DecodeOptions::default());
    assert_eq!(
        people.as_slice(),
        &[person("Alice", 0), person("Bob", 25)]
    );
}

#[test]
fn extra_cells_beyond_schema_are_ignored() {
    let input = b"Alice,30,spurious\n";
    let options = DecodeOptions::default().with_header_row(false);
    let people = decode_people(input, TargetShape::List, &options);
    assert_eq!(people.as_slice(), &[person("Alice", 30)]);
}

#[test]
fn empty_lines_are_skipped() {
    let input = b"Name,Age\n\nAlice,30\n\n\nBob,25\n";
    let people = decode_people(input, TargetShape::List, &DecodeOptions::default());
    assert_eq!(people.len(), 2);
}

#[test]
fn fixed_array_length_equals_data_line_count() {
    let input = b"Name,Age\nAlice,30\nBob,25\nCarol,41\n";
    let people = decode_people(input, TargetShape::FixedArray, &DecodeOptions::default());
    match people {
        Decoded::FixedArray(records) => assert_eq!(records.len(), 3),
        other => panic!("expected fixed array, got {other:?}"),
    }
}

#[test]
fn decoding_twice_yields_equal_collections() {
    let input = b"Name,Age\nAlice,30\nBob,25\n";
    let options = DecodeOptions::default();
    let first = decode_people(input, TargetShape::List, &options);
    let second = decode_people(input, TargetShape::List, &options);
    assert_eq!(first, second);
}

#[test]
fn header_only_input_yields_empty_collection() {
    let people = decode_people(b"Name,Age\n", TargetShape::List, &DecodeOptions::default());
    assert!(people.is_empty());
}

#[test]
fn empty_input_yields_empty_collection() {
    let people = decode_people(b"", TargetShape::FixedArray, &DecodeOptions::default());
    assert!(people.is_empty());
    assert_eq!(people.shape(), TargetShape::FixedArray);
}

#[test]
fn crlf_line_endings_are_handled() {
    let input = b"Name,Age\r\nAlice,30\r\nBob,25\r\n";
    let people = decode_people(input, TargetShape::List, &DecodeOptions::default());
    assert_eq!(
        people.as_slice(),
        &[person("Alice", 30), person("Bob", 25)]
    );
}

#[test]
fn utf8_bom_is_stripped_before_header_matching() {
    let input = b"\xef\xbb\xbfName,Age\nAlice,30\n";
    let people = decode_people(input, TargetShape::List, &DecodeOptions::default());
    assert_eq!(people.as_slice(), &[person("Alice", 30)]);
}

#[test]
fn alternate_delimiters_split_on_any_character() {
    let input = b"Name;Age\nAlice;30\nBob|25\n";
    let options = DecodeOptions::default().with_delimiter(";|");
    let people = decode_people(input, TargetShape::List, &options);
    assert_eq!(
        people.as_slice(),
        &[person("Alice", 30), person("Bob", 25)]
    );
}

#[test]
fn latin1_labelled_input_decodes_high_bytes() {
    let input = b"Name,Age\nRen\xe9,33\n";
    let options = DecodeOptions::default().with_encoding("latin1");
    let people = decode_people(input, TargetShape::List, &options);
    assert_eq!(people.as_slice(), &[person("Ren\u{e9}", 33)]);
}

#[test]
fn malformed_utf8_fails_with_encoding_error() {
    let input = b"Name,Age\nAl\xffice,30\n";
    let err = decode::<Person, _>(&input[..], TargetShape::List, &DecodeOptions::default())
        .unwrap_err();
    assert!(matches!(err, DecodeError::Encoding { .. }));
}

#[test]
fn unknown_encoding_label_is_rejected_eagerly() {
    let options = DecodeOptions::default().with_encoding("utf-99");
    let err = decode::<Person, _>(&b""[..], TargetShape::List, &options).unwrap_err();
    match err {
        DecodeError::UnsupportedEncoding { label } => assert_eq!(label, "utf-99"),
        other => panic!("expected UnsupportedEncoding, got {other:?}"),
    }
}

#[test]
fn empty_delimiter_is_rejected() {
    let options = DecodeOptions::default().with_delimiter("");
    let err = decode::<Person, _>(&b""[..], TargetShape::List, &options).unwrap_err();
    assert!(matches!(err, DecodeError::EmptyDelimiter));
}

#[test]
fn non_collection_shapes_are_rejected() {
    assert!(can_decode(TargetShape::List));
    assert!(can_decode(TargetShape::FixedArray));
    assert!(!can_decode(TargetShape::Scalar));
    assert!(!can_decode(TargetShape::Mapping));

    let err = decode::<Person, _>(&b""[..], TargetShape::Scalar, &DecodeOptions::default())
        .unwrap_err();
    assert!(matches!(
        err,
        DecodeError::UnsupportedTarget {
            shape: TargetShape::Scalar
        }
    ));
}

#[test]
fn lenient_policy_absorbs_bad_cells() {
    let input = b"Name,Age\nAlice,notanumber\n";
    let people = decode_people(input, TargetShape::List, &DecodeOptions::default());
    assert_eq!(people.as_slice(), &[person("Alice", 0)]);
}

#[test]
fn strict_policy_reports_line_and_column() {
    let input = b"Name,Age\nAlice,30\nBob,notanumber\n";
    let options = DecodeOptions::default().with_coercion(CoercionPolicy::Strict);
    let err = decode::<Person, _>(&input[..], TargetShape::List, &options).unwrap_err();
    match err {
        DecodeError::Coerce {
            line,
            column,
            field,
            ..
        } => {
            assert_eq!(line, 3);
            assert_eq!(column, 1);
            assert_eq!(field, "Age");
        }
        other => panic!("expected Coerce error, got {other:?}"),
    }
}

// A richer record exercising display names and enum-by-name fields.
#[derive(Debug, Default, Clone, PartialEq)]
struct Employee {
    name: String,
    years: u64,
    status: Status,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
enum Status {
    #[default]
    Unknown,
    Active,
    Retired,
}

fn parse_status(name: &str) -> Option<FieldValue> {
    match name {
        "Active" => Some(FieldValue::Unsigned(1)),
        "Retired" => Some(FieldValue::Unsigned(2)),
        _ => None,
    }
}

impl CsvRecord for Employee {
    fn schema() -> Result<RecordSchema<Self>, SchemaError> {
        RecordSchema::builder(Employee::default)
            .field("name", FieldKind::Text, |e, v| {
                if let FieldValue::Text(s) = v {
                    e.name = s;
                }
            })
            .field_with_display("years_employed", "Years", FieldKind::Unsigned, |e, v| {
                if let FieldValue::Unsigned(n) = v {
                    e.years = n;
                }
            })
            .field("status", FieldKind::Enum(parse_status), |e, v| {
                e.status = match v {
                    FieldValue::Unsigned(1) => Status::Active,
                    FieldValue::Unsigned(2) => Status::Retired,
                    _ => Status::Unknown,
                };
            })
            .build()
    }
}

#[test]
fn display_names_match_only_when_enabled() {
    let input = b"name,Years,status\nDana,12,Active\n";

    let ignored = decode::<Employee, _>(
        &input[..],
        TargetShape::List,
        &DecodeOptions::default(),
    )
    .unwrap();
    assert_eq!(ignored.as_slice()[0].years, 0);

    let options = DecodeOptions::default().with_display_names(true);
    let matched = decode::<Employee, _>(&input[..], TargetShape::List, &options).unwrap();
    assert_eq!(
        matched.as_slice(),
        &[Employee {
            name: "Dana".to_string(),
            years: 12,
            status: Status::Active,
        }]
    );
}

#[test]
fn enum_fields_resolve_by_name() {
    let input = b"name,years_employed,status\nEli,3,Retired\nFay,8,Dormant\n";
    let employees =
        decode::<Employee, _>(&input[..], TargetShape::List, &DecodeOptions::default()).unwrap();
    assert_eq!(employees.as_slice()[0].status, Status::Retired);
    // Unknown names fall back to the default under the lenient policy.
    assert_eq!(employees.as_slice()[1].status, Status::Unknown);
}

#[test]
fn explicit_schema_can_be_supplied_directly() {
    let schema = Person::schema().unwrap();
    let input = b"Name,Age\nAlice,30\n";
    let people = decode_with_schema(
        &input[..],
        &schema,
        TargetShape::List,
        &DecodeOptions::default(),
    )
    .unwrap();
    assert_eq!(people.as_slice(), &[person("Alice", 30)]);
}
