use common::pub_fields_struct;

/// A datatype size argument: `NUMBER(10,2)` carries numbers, `NUMBER(*)` and
/// `FLOAT(*)` carry the wildcard, which Oracle reads as "maximum".
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Precision {
    Number(i64),
    Wildcard,
}

pub_fields_struct! {
    /// An Oracle datatype as written in the source: the name is kept verbatim
    /// (`number`, `VARCHAR2`, ...), precision and scale are optional and
    /// independent.
    #[derive(Clone, Debug, PartialEq)]
    struct DataType {
        name: String,
        precision: Option<Precision>,
        scale: Option<Precision>,
    }
}
