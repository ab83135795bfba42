//! Positional schema of a results record.
//!
//! A completed submission arrives as one pipe-delimited string whose segments
//! map one-to-one onto the columns of the `user_data` table, in the order
//! given by [`COLUMNS`]. This module owns that order; the ingestion INSERT
//! and the table migration both derive their column lists from it.

/// Number of data columns in a well-formed record.
pub const FIELD_COUNT: usize = 53;

/// Ordered column names of the `user_data` table, excluding the auto key.
///
/// Identity fields, electricity, four fuel slots, three renewable slots, the
/// CO2 credit, then the six aggregate totals.
pub const COLUMNS: [&str; FIELD_COUNT] = [
    "user_id",
    "name",
    "surname",
    "email",
    "company",
    "industry",
    "activities",
    "intent",
    "electricity",
    "elec_t_co2",
    "fuel1",
    "fuel1_con",
    "fuel1_meas",
    "fuel1_t_co2",
    "fuel1_t_ch4",
    "fuel1_t_n2o",
    "fuel2",
    "fuel2_con",
    "fuel2_meas",
    "fuel2_t_co2",
    "fuel2_t_ch4",
    "fuel2_t_n2o",
    "fuel3",
    "fuel3_con",
    "fuel3_meas",
    "fuel3_t_co2",
    "fuel3_t_ch4",
    "fuel3_t_n2o",
    "fuel4",
    "fuel4_con",
    "fuel4_meas",
    "fuel4_t_co2",
    "fuel4_t_ch4",
    "fuel4_t_n2o",
    "ren1",
    "ren1_con",
    "ren1_meas",
    "ren1_t_co2_of",
    "ren2",
    "ren2_con",
    "ren2_meas",
    "ren2_t_co2_of",
    "ren3",
    "ren3_con",
    "ren3_meas",
    "ren3_t_co2_of",
    "co2_credit",
    "tot_t_co2",
    "tot_t_ch4",
    "tot_t_n2o",
    "tot_t_co2_eq",
    "tot_t_co2_of",
    "net_t_co2_eq",
];

/// Split a raw data string into positional values.
///
/// Empty segments become `None`; everything else passes through as opaque
/// text with no type coercion. The result has exactly one entry per input
/// segment: callers decide what a count other than [`FIELD_COUNT`] means.
pub fn decode(raw: &str) -> Vec<Option<String>> {
    raw.split('|')
        .map(|segment| {
            if segment.is_empty() {
                None
            } else {
                Some(segment.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_list_matches_field_count() {
        assert_eq!(COLUMNS.len(), FIELD_COUNT);

        let unique: std::collections::HashSet<_> = COLUMNS.iter().collect();
        assert_eq!(unique.len(), FIELD_COUNT);
    }

    #[test]
    fn decode_maps_empty_segments_to_none() {
        let values = decode("a||b");
        assert_eq!(
            values,
            vec![Some("a".to_string()), None, Some("b".to_string())]
        );
    }

    #[test]
    fn decode_empty_input_is_single_none() {
        assert_eq!(decode(""), vec![None]);
    }

    #[test]
    fn decode_preserves_segment_count() {
        let raw = vec!["x"; FIELD_COUNT].join("|");
        assert_eq!(decode(&raw).len(), FIELD_COUNT);

        // Short and long inputs are reported as-is, not padded or truncated.
        assert_eq!(decode("a|b|c").len(), 3);
        let long = vec![""; FIELD_COUNT + 5].join("|");
        assert_eq!(decode(&long).len(), FIELD_COUNT + 5);
    }

    #[test]
    fn decode_keeps_values_opaque() {
        let values = decode("12.5|not a number| spaced ");
        assert_eq!(values[0].as_deref(), Some("12.5"));
        assert_eq!(values[1].as_deref(), Some("not a number"));
        assert_eq!(values[2].as_deref(), Some(" spaced "));
    }
}
