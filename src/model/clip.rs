//! The clip record.

use super::parameters::*;
use crate::core::{store_sequence, store_single, Field, ParameterContainer, Slot};
use crate::types::{
    Dimensions, Encoders, ExposureFalloff, Orientations, Rational, Synchronization, Timecode,
    Timestamp, Transform,
};

/// Declares the clip field table and a typed getter/setter pair per field.
///
/// `single` fields store one value; `sequence` fields one value per frame.
macro_rules! clip_fields {
    (@accessors single $id:ident, $setter:ident, $ty:ty) => {
        #[doc = concat!("Value of `", stringify!($id), "`, if set.")]
        pub fn $id(&self) -> Option<$ty> {
            self.single(stringify!($id))
        }

        #[doc = concat!("Set `", stringify!($id), "`.")]
        pub fn $setter(&mut self, value: impl Into<$ty>) {
            store_single(self, stringify!($id), value.into());
        }
    };
    (@accessors sequence $id:ident, $setter:ident, $ty:ty) => {
        #[doc = concat!("Per-frame values of `", stringify!($id), "`, if set.")]
        pub fn $id(&self) -> Option<Vec<$ty>> {
            self.sequence(stringify!($id))
        }

        #[doc = concat!("Set the per-frame values of `", stringify!($id), "`.")]
        pub fn $setter(&mut self, values: impl IntoIterator<Item = $ty>) {
            store_sequence(self, stringify!($id), values);
        }
    };
    ($($shape:ident $id:ident, $setter:ident: $ty:ty = $param:ident;)*) => {
        static CLIP_FIELDS: &[Field] = &[$(Field::new(stringify!($id), &$param)),*];

        impl Clip {
            $(clip_fields!(@accessors $shape $id, $setter, $ty);)*
        }
    };
}

/// Metadata for a camera clip.
///
/// Static fields hold one value for the whole clip; regular fields hold one
/// value per frame. A record produced by [`extract`](ParameterContainer::extract)
/// holds a single inline value in each populated regular field, which the
/// sequence getters return as a one-element list.
#[derive(Clone, Debug, PartialEq)]
pub struct Clip {
    slots: Vec<Option<Slot>>,
}

impl Default for Clip {
    fn default() -> Self {
        Self {
            slots: vec![None; CLIP_FIELDS.len()],
        }
    }
}

impl Clip {
    /// Create an empty clip.
    pub fn new() -> Self {
        Self::default()
    }
}

clip_fields! {
    single duration, set_duration: Rational = DURATION;
    single capture_fps, set_capture_fps: Rational = CAPTURE_RATE;
    single active_sensor_physical_dimensions, set_active_sensor_physical_dimensions: Dimensions = ACTIVE_SENSOR_PHYSICAL_DIMENSIONS;
    single lens_make, set_lens_make: String = LENS_MAKE;
    single lens_model, set_lens_model: String = LENS_MODEL;
    single lens_serial_number, set_lens_serial_number: String = LENS_SERIAL_NUMBER;
    single lens_firmware, set_lens_firmware: String = LENS_FIRMWARE;
    single camera_make, set_camera_make: String = CAMERA_MAKE;
    single camera_model, set_camera_model: String = CAMERA_MODEL;
    single camera_firmware, set_camera_firmware: String = CAMERA_FIRMWARE;
    single camera_serial_number, set_camera_serial_number: String = CAMERA_SERIAL_NUMBER;
    single iso, set_iso: i64 = ISO;
    sequence t_number, set_t_number: i64 = T_STOP;
    sequence f_number, set_f_number: i64 = F_STOP;
    sequence focal_length, set_focal_length: i64 = FOCAL_LENGTH;
    sequence focus_position, set_focus_position: i64 = FOCUS_POSITION;
    sequence entrance_pupil_position, set_entrance_pupil_position: Rational = ENTRANCE_PUPIL_POSITION;
    single anamorphic_squeeze, set_anamorphic_squeeze: i64 = ANAMORPHIC_SQUEEZE;
    single fdl_link, set_fdl_link: String = FDL_LINK;
    single shutter_angle, set_shutter_angle: i64 = SHUTTER_ANGLE;
    sequence packet_id, set_packet_id: String = PACKET_ID;
    sequence protocol, set_protocol: String = PROTOCOL;
    sequence metadata_status, set_metadata_status: String = METADATA_STATUS;
    sequence metadata_recording, set_metadata_recording: bool = METADATA_RECORDING;
    sequence metadata_slate, set_metadata_slate: String = METADATA_SLATE;
    sequence metadata_notes, set_metadata_notes: String = METADATA_NOTES;
    sequence metadata_related_packets, set_metadata_related_packets: Vec<String> = METADATA_RELATED_PACKETS;
    sequence timing_mode, set_timing_mode: String = TIMING_MODE;
    sequence timing_timestamp, set_timing_timestamp: Timestamp = TIMING_TIMESTAMP;
    sequence timing_sequence_number, set_timing_sequence_number: i64 = TIMING_SEQUENCE_NUMBER;
    sequence timing_frame_rate, set_timing_frame_rate: f64 = TIMING_FRAME_RATE;
    sequence timing_timecode, set_timing_timecode: Timecode = TIMING_TIMECODE;
    sequence timing_synchronization, set_timing_synchronization: Synchronization = TIMING_SYNCHRONIZATION;
    sequence transforms, set_transforms: Vec<Transform> = TRANSFORMS;
    sequence lens_encoders, set_lens_encoders: Encoders = LENS_ENCODERS;
    sequence lens_fov_scale, set_lens_fov_scale: Orientations = LENS_FOV_SCALE;
    sequence lens_exposure_falloff, set_lens_exposure_falloff: ExposureFalloff = LENS_EXPOSURE_FALLOFF;
}

impl ParameterContainer for Clip {
    const NAME: &'static str = "Clip";
    const DESCRIPTION: &'static str = "Metadata for a camera clip.";

    fn fields() -> &'static [Field] {
        CLIP_FIELDS
    }

    fn slots(&self) -> &[Option<Slot>] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [Option<Slot>] {
        &mut self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;
    use crate::util::Error;
    use serde_json::json;
    use std::collections::HashSet;

    #[test]
    fn test_field_table() {
        let fields = Clip::fields();
        assert_eq!(fields.len(), 37);

        let ids: HashSet<_> = fields.iter().map(|f| f.id).collect();
        let names: HashSet<_> = fields.iter().map(|f| f.parameter.canonical_name()).collect();
        assert_eq!(ids.len(), fields.len());
        assert_eq!(names.len(), fields.len());

        let t_number = Clip::field("t_number").expect("t_number field");
        assert_eq!(t_number.parameter.canonical_name(), "tStop");
        assert_eq!(
            Clip::field_by_canonical_name("sequence_number").map(|f| f.id),
            Some("timing_sequence_number")
        );
    }

    #[test]
    fn test_typed_accessors() {
        let mut clip = Clip::new();
        assert!(clip.is_empty());
        assert_eq!(clip.iso(), None);

        clip.set_iso(13);
        clip.set_duration(Rational::new(3, 1));
        clip.set_t_number([2000, 4000]);
        clip.set_metadata_related_packets([vec!["urn:uuid:f81d4fae-7dec-11d0-a765-00a0c91e6bf6".to_string()]]);

        assert_eq!(clip.iso(), Some(13));
        assert_eq!(clip.duration(), Some(Rational::new(3, 1)));
        assert_eq!(clip.t_number(), Some(vec![2000, 4000]));
        assert_eq!(clip.metadata_related_packets().map(|p| p.len()), Some(1));
        assert_eq!(clip.len_frames(), 2);
        assert!(clip.validate().is_ok());
    }

    #[test]
    fn test_generic_set() {
        let mut clip = Clip::new();
        clip.set("shutter_angle", Slot::Single(Value::Int(180_000)))
            .expect("set shutter angle");
        assert_eq!(clip.shutter_angle(), Some(180_000));

        let err = clip.set("shutter_angle", Slot::Single(Value::from("wide")));
        assert!(matches!(err, Err(Error::TypeMismatch { .. })));

        let err = clip.set("shutter_angle", Slot::Sequence(vec![Value::Int(1)]));
        assert!(matches!(err, Err(Error::TypeMismatch { .. })));

        let err = clip.set("no_such_field", Slot::Single(Value::Int(1)));
        assert!(matches!(err, Err(Error::FieldNotFound(_))));

        assert_eq!(clip.clear("shutter_angle"), Some(Slot::Single(Value::Int(180_000))));
        assert!(clip.is_empty());
    }

    #[test]
    fn test_set_regular_takes_sequence() {
        let mut clip = Clip::new();
        clip.set_iso(800);

        let err = clip.set("t_number", Slot::Single(Value::Int(2000)));
        assert!(matches!(err, Err(Error::TypeMismatch { .. })));
        assert_eq!(clip.t_number(), None);

        clip.set("t_number", Slot::Sequence(vec![Value::Int(2000)]))
            .expect("set t-number");
        let json = clip.to_json().expect("encode clip");
        assert_eq!(json, json!({ "isoSpeed": 800, "tStop": [2000] }));
        assert_eq!(Clip::from_json(&json).expect("decode clip"), clip);
    }

    #[test]
    fn test_json_layout() {
        let mut clip = Clip::new();
        clip.set_focal_length([35, 50]);
        clip.set_lens_make("Zeiss");

        let json = clip.to_json().expect("encode clip");
        assert_eq!(json, json!({ "lensMake": "Zeiss", "focalLength": [35, 50] }));

        let keys: Vec<_> = json.as_object().expect("object").keys().cloned().collect();
        assert_eq!(keys, vec!["lensMake", "focalLength"]);
    }

    #[test]
    fn test_validation_failures() {
        let mut clip = Clip::new();
        clip.set_shutter_angle(400_000);
        clip.set_focus_position([1000, 0, 2000]);
        clip.set_lens_make("Cooke");

        let err = clip.validate().expect_err("invalid clip");
        let failures = err.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].field, "focus_position");
        assert_eq!(failures[0].index, Some(1));
        assert_eq!(failures[1].canonical_name, "shutterAngle");
        assert_eq!(failures[1].index, None);
        assert!(!clip.is_valid());
    }
}
