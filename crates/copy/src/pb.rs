//! Model-to-protobuf copy entry points.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::copy::Copier;

/// The stock model-to-protobuf copier: stock conversion rules, zero-valued
/// source fields skipped, case-insensitive field matching, conversion
/// mismatches left unmodified.
#[must_use]
pub fn model_pb_copier() -> Copier {
    Copier::default()
}

/// Copy matching fields of `src` into `dst` with the stock configuration.
///
/// Engine-level failures are logged and swallowed; use [`Copier::copy`] to
/// observe them.
pub fn copy_model_pb<T, S>(dst: &mut T, src: &S)
where
    T: Serialize + DeserializeOwned,
    S: Serialize + ?Sized,
{
    if let Err(err) = model_pb_copier().copy(dst, src) {
        warn!(error = %err, "copy_model_pb failed");
    }
}

/// Collection form of [`copy_model_pb`]: the destination ends up with exactly
/// one record per source record.
pub fn copy_model_pb_slice<T, S>(dst: &mut Vec<T>, src: &[S])
where
    T: Default + Serialize + DeserializeOwned,
    S: Serialize,
{
    if let Err(err) = model_pb_copier().copy_slice(dst, src) {
        warn!(error = %err, "copy_model_pb_slice failed");
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Serialize};
    use svckit_core::{NullTime, ZERO_TIME_UNIX};

    use super::{copy_model_pb, copy_model_pb_slice};

    #[derive(Clone, Debug, Serialize)]
    struct TimedModel {
        time_field: DateTime<Utc>,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    struct TimedPb {
        time_field: i64,
    }

    #[test]
    fn time_field_copies_as_epoch_seconds() {
        let now = Utc::now();
        let mut pb = TimedPb::default();
        copy_model_pb(&mut pb, &TimedModel { time_field: now });
        assert_eq!(pb.time_field, now.timestamp());
    }

    #[test]
    fn nullable_time_field_copies_as_epoch_seconds() {
        #[derive(Serialize)]
        struct Model {
            time_field: NullTime,
        }

        let now = Utc::now();
        let mut pb = TimedPb::default();
        copy_model_pb(
            &mut pb,
            &Model {
                time_field: NullTime::new(now),
            },
        );
        assert_eq!(pb.time_field, now.timestamp());
    }

    #[test]
    fn unset_nullable_time_with_payload_copies_as_sentinel() {
        #[derive(Serialize)]
        struct Model {
            time_field: NullTime,
        }

        let mut pb = TimedPb { time_field: 7 };
        copy_model_pb(
            &mut pb,
            &Model {
                time_field: NullTime {
                    value: Utc::now(),
                    valid: false,
                },
            },
        );
        assert_eq!(pb.time_field, ZERO_TIME_UNIX);
    }

    #[test]
    fn identity_copy_preserves_every_field() {
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
        struct Model {
            time: DateTime<Utc>,
            null_time: NullTime,
            time_ref: Option<DateTime<Utc>>,
            text: String,
            int64: i64,
            int32: i32,
        }

        impl Default for Model {
            fn default() -> Self {
                Self {
                    time: svckit_core::zero_time(),
                    null_time: svckit_core::null_time(),
                    time_ref: None,
                    text: String::new(),
                    int64: 0,
                    int32: 0,
                }
            }
        }

        let now = Utc::now();
        let model = Model {
            time: now,
            null_time: NullTime::new(now),
            time_ref: Some(now),
            text: "test".to_owned(),
            int64: 123_456_789,
            int32: 123,
        };

        let mut copied = Model::default();
        copy_model_pb(&mut copied, &model);
        assert_eq!(copied, model);
    }

    #[test]
    fn reference_fields_copy_into_flat_pb() {
        #[derive(Serialize)]
        struct Model {
            time: DateTime<Utc>,
            null_time: NullTime,
            time_ref: Option<DateTime<Utc>>,
            text: Option<String>,
            int64: Option<i64>,
            int32: Option<i32>,
            int: Option<i64>,
        }

        #[derive(Debug, Default, Serialize, Deserialize)]
        struct Pb {
            time: i64,
            null_time: i64,
            time_ref: i64,
            text: String,
            int64: i64,
            int32: i64,
            int: i64,
        }

        let now = Utc::now();
        let model = Model {
            time: now,
            null_time: NullTime::new(now),
            time_ref: Some(now),
            text: Some("test".to_owned()),
            int64: Some(123_456_789),
            int32: Some(123),
            int: Some(456),
        };

        let mut pb = Pb::default();
        copy_model_pb(&mut pb, &model);
        assert_eq!(pb.time, now.timestamp());
        assert_eq!(pb.null_time, now.timestamp());
        assert_eq!(pb.time_ref, now.timestamp());
        assert_eq!(pb.text, "test");
        assert_eq!(pb.int64, 123_456_789);
        assert_eq!(pb.int32, 123);
        assert_eq!(pb.int, 456);
    }

    #[test]
    fn slice_copy_keeps_one_output_per_input() {
        #[derive(Serialize)]
        struct Model {
            id: i64,
            created_at: DateTime<Utc>,
        }

        #[derive(Debug, Default, Serialize, Deserialize)]
        struct Pb {
            id: i64,
            created_at: i64,
        }

        let now = Utc::now();
        let models: Vec<Model> = (1..=3)
            .map(|id| Model {
                id,
                created_at: now,
            })
            .collect();

        let mut pbs: Vec<Pb> = Vec::new();
        copy_model_pb_slice(&mut pbs, &models);
        assert_eq!(pbs.len(), models.len());
        for (model, pb) in models.iter().zip(&pbs) {
            assert_eq!(pb.id, model.id);
            assert_eq!(pb.created_at, now.timestamp());
        }
    }

    #[test]
    fn slice_of_references_copies_too() {
        #[derive(Serialize)]
        struct Model {
            id: i64,
        }

        #[derive(Debug, Default, Serialize, Deserialize)]
        struct Pb {
            id: i64,
        }

        let a = Model { id: 1 };
        let b = Model { id: 2 };
        let refs = [&a, &b];

        let mut pbs: Vec<Pb> = Vec::new();
        copy_model_pb_slice(&mut pbs, &refs);
        assert_eq!(pbs.len(), 2);
        assert_eq!(pbs[1].id, 2);
    }
}
