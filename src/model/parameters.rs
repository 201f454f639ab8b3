//! Parameter descriptors of the clip fields.
//!
//! Each `static` binds a reusable type from [`crate::params`] to a wire name,
//! sampling, units, section and description. Descriptors are shared by every
//! [`Clip`](super::Clip) instance.

use crate::core::{Parameter, Sampling};
use crate::params::{
    ArrayType, BooleanType, EncodersType, EnumType, ExposureFalloffType, FovScaleType,
    IntegerDimensionsType, IntegerType, RationalType, RealType, StringType, SynchronizationType,
    TimecodeType, TimestampType, TransformsType, UuidUrnType,
};

/// Literals accepted by the timing mode.
pub const TIMING_MODES: &[&str] = &["external", "internal"];

// === Value types ===

static STRICTLY_POSITIVE_RATIONAL: RationalType = RationalType::STRICTLY_POSITIVE;
static RATIONAL: RationalType = RationalType::ANY;
static STRICTLY_POSITIVE_INTEGER: IntegerType = IntegerType::STRICTLY_POSITIVE;
static NON_NEGATIVE_INTEGER: IntegerType = IntegerType::NON_NEGATIVE;
static SHUTTER_ANGLE_TYPE: IntegerType = IntegerType::new(1, 360_000);
static NON_NEGATIVE_REAL: RealType = RealType::NON_NEGATIVE;
static DIMENSIONS: IntegerDimensionsType = IntegerDimensionsType;
static STRING: StringType = StringType;
static UUID_URN: UuidUrnType = UuidUrnType;
static BOOLEAN: BooleanType = BooleanType;
static UUID_URN_LIST: ArrayType = ArrayType::new(&UUID_URN);
static TIMING_MODE_TYPE: EnumType = EnumType::new(TIMING_MODES);
static TIMESTAMP: TimestampType = TimestampType;
static TIMECODE: TimecodeType = TimecodeType;
static SYNCHRONIZATION: SynchronizationType = SynchronizationType;
static TRANSFORMS_TYPE: TransformsType = TransformsType;
static ENCODERS: EncodersType = EncodersType;
static FOV_SCALE_TYPE: FovScaleType = FovScaleType;
static EXPOSURE_FALLOFF_TYPE: ExposureFalloffType = ExposureFalloffType;

// === Clip identity ===

pub static DURATION: Parameter = Parameter::new("duration", Sampling::Static, &STRICTLY_POSITIVE_RATIONAL)
    .with_units("second")
    .with_description("Duration of the clip.");

pub static CAPTURE_RATE: Parameter = Parameter::new("captureRate", Sampling::Static, &STRICTLY_POSITIVE_RATIONAL)
    .with_units("hertz")
    .with_description("Capture frame rate of the camera.");

pub static ACTIVE_SENSOR_PHYSICAL_DIMENSIONS: Parameter =
    Parameter::new("activeSensorPhysicalDimensions", Sampling::Static, &DIMENSIONS)
        .with_units("micron")
        .with_description("Height and width of the active area of the camera sensor.");

// === Lens and camera identity ===

pub static LENS_MAKE: Parameter = Parameter::new("lensMake", Sampling::Static, &STRING)
    .with_description("Make of the lens.");

pub static LENS_MODEL: Parameter = Parameter::new("lensModel", Sampling::Static, &STRING)
    .with_description("Model of the lens.");

pub static LENS_SERIAL_NUMBER: Parameter = Parameter::new("lensSerialNumber", Sampling::Static, &STRING)
    .with_description("Unique identifier of the lens.");

pub static LENS_FIRMWARE: Parameter = Parameter::new("lensFirmwareVersion", Sampling::Static, &STRING)
    .with_description("Firmware version of the lens.");

pub static CAMERA_MAKE: Parameter = Parameter::new("cameraMake", Sampling::Static, &STRING)
    .with_description("Make of the camera.");

pub static CAMERA_MODEL: Parameter = Parameter::new("cameraModel", Sampling::Static, &STRING)
    .with_description("Model of the camera.");

pub static CAMERA_FIRMWARE: Parameter = Parameter::new("cameraFirmwareVersion", Sampling::Static, &STRING)
    .with_description("Firmware version of the camera.");

pub static CAMERA_SERIAL_NUMBER: Parameter = Parameter::new("cameraSerialNumber", Sampling::Static, &STRING)
    .with_description("Unique identifier of the camera.");

// === Exposure and optics ===

pub static ISO: Parameter = Parameter::new("isoSpeed", Sampling::Static, &STRICTLY_POSITIVE_INTEGER)
    .with_units("unit")
    .with_description("Arithmetic ISO scale as defined in ISO 12232.");

pub static T_STOP: Parameter = Parameter::new("tStop", Sampling::Regular, &STRICTLY_POSITIVE_INTEGER)
    .with_units("0.001 unit")
    .with_description(
        "Linear t-number of the lens: the f-number divided by the square root of the lens \
         transmittance.",
    );

pub static F_STOP: Parameter = Parameter::new("fStop", Sampling::Regular, &STRICTLY_POSITIVE_INTEGER)
    .with_units("0.001 unit")
    .with_section("lens")
    .with_description("Linear f-number of the lens: the focal length divided by the entrance pupil diameter.");

pub static FOCAL_LENGTH: Parameter = Parameter::new("focalLength", Sampling::Regular, &STRICTLY_POSITIVE_INTEGER)
    .with_units("millimeter")
    .with_description(
        "Nominal focal length of the lens, as printed on a prime lens. Undefined for zoom lenses.",
    );

pub static FOCUS_POSITION: Parameter = Parameter::new("focusPosition", Sampling::Regular, &STRICTLY_POSITIVE_INTEGER)
    .with_units("millimeter")
    .with_description("Focus distance of the lens.");

pub static ENTRANCE_PUPIL_POSITION: Parameter = Parameter::new("entrancePupilPosition", Sampling::Regular, &RATIONAL)
    .with_units("millimeter")
    .with_description(
        "Position of the entrance pupil relative to the nominal imaging plane. Positive when \
         the entrance pupil lies on the object side of the imaging plane.",
    );

pub static ANAMORPHIC_SQUEEZE: Parameter = Parameter::new("anamorphicSqueeze", Sampling::Static, &STRICTLY_POSITIVE_INTEGER)
    .with_units("0.01 unit")
    .with_description(
        "Nominal ratio of height to width of the image of an axis-aligned square on the \
         sensor. Usable for de-squeezing, though not exact over the whole image.",
    );

pub static FDL_LINK: Parameter = Parameter::new("fdlLink", Sampling::Static, &UUID_URN)
    .with_description("Unique identifier of the framing decision list used by the camera.");

pub static SHUTTER_ANGLE: Parameter = Parameter::new("shutterAngle", Sampling::Static, &SHUTTER_ANGLE_TYPE)
    .with_units("degrees (angular)")
    .with_description(
        "Shutter speed as a fraction of the capture frame rate. The shutter speed in 1/s is \
         the value divided by 360 times the capture frame rate.",
    );

// === Packet ===

pub static PACKET_ID: Parameter = Parameter::new("packetId", Sampling::Regular, &UUID_URN)
    .with_description("Unique identifier of the packet carrying the data.");

pub static PROTOCOL: Parameter = Parameter::new("protocol", Sampling::Regular, &STRING)
    .with_description("Name and version of the protocol the packet conforms to.");

// === Metadata ===

pub static METADATA_STATUS: Parameter = Parameter::new("status", Sampling::Regular, &STRING)
    .with_section("metadata")
    .with_description("Free-form status of the system, e.g. 'Optical Good' for a tracker.");

pub static METADATA_RECORDING: Parameter = Parameter::new("recording", Sampling::Regular, &BOOLEAN)
    .with_section("metadata")
    .with_description("True while the system is recording data.");

pub static METADATA_SLATE: Parameter = Parameter::new("slate", Sampling::Regular, &STRING)
    .with_section("metadata")
    .with_description("Free-form recording slate, e.g. 'A101_A_4'.");

pub static METADATA_NOTES: Parameter = Parameter::new("notes", Sampling::Regular, &STRING)
    .with_section("metadata")
    .with_description("Free-form notes.");

pub static METADATA_RELATED_PACKETS: Parameter = Parameter::new("relatedPackets", Sampling::Regular, &UUID_URN_LIST)
    .with_section("metadata")
    .with_description("Identifiers of packets related to this one.");

// === Timing ===

pub static TIMING_MODE: Parameter = Parameter::new("mode", Sampling::Regular, &TIMING_MODE_TYPE)
    .with_section("timing")
    .with_description(
        "'external' when the transport carries its own timing and no timing data is needed; \
         'internal' when it does not, in which case a timestamp must be provided.",
    );

pub static TIMING_TIMESTAMP: Parameter = Parameter::new("timestamp", Sampling::Regular, &TIMESTAMP)
    .with_section("timing")
    .with_description("PTP-style time at which the sample was captured.");

pub static TIMING_SEQUENCE_NUMBER: Parameter = Parameter::new("sequence_number", Sampling::Regular, &NON_NEGATIVE_INTEGER)
    .with_section("timing")
    .with_description("Sequence number of the packet, used to detect loss and reordering.");

pub static TIMING_FRAME_RATE: Parameter = Parameter::new("frameRate", Sampling::Regular, &NON_NEGATIVE_REAL)
    .with_section("timing")
    .with_description("Rate at which samples are produced.");

pub static TIMING_TIMECODE: Parameter = Parameter::new("timecode", Sampling::Regular, &TIMECODE)
    .with_section("timing")
    .with_description("SMPTE timecode of the sample.");

pub static TIMING_SYNCHRONIZATION: Parameter = Parameter::new("synchronization", Sampling::Regular, &SYNCHRONIZATION)
    .with_section("timing")
    .with_description("Synchronization source and state of the device.");

// === Pose and lens state ===

pub static TRANSFORMS: Parameter = Parameter::new("transforms", Sampling::Regular, &TRANSFORMS_TYPE)
    .with_units("metres / degrees")
    .with_description(
        "Chain of poses of the camera sensor relative to the stage origin. Translation in \
         metres with Z up, right-handed, Y forward at zero rotation. Rotation as intrinsic \
         ZXY Euler angles (pan, tilt, roll) in degrees; angles beyond one turn are allowed.",
    );

pub static LENS_ENCODERS: Parameter = Parameter::new("encoders", Sampling::Regular, &ENCODERS)
    .with_section("lens")
    .with_description("Normalised raw focus, iris and zoom encoder readings.");

pub static LENS_FOV_SCALE: Parameter = Parameter::new("fovScale", Sampling::Regular, &FOV_SCALE_TYPE)
    .with_section("lens")
    .with_description("Scale factors on the horizontal and vertical field of view, for tweaking lens calibrations.");

pub static LENS_EXPOSURE_FALLOFF: Parameter = Parameter::new("exposureFalloff", Sampling::Regular, &EXPOSURE_FALLOFF_TYPE)
    .with_section("lens")
    .with_description("Coefficients of the exposure fall-off (vignetting) of the lens.");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Value;

    #[test]
    fn test_sampling() {
        assert!(DURATION.sampling().is_static());
        assert!(SHUTTER_ANGLE.sampling().is_static());
        assert!(T_STOP.sampling().is_regular());
        assert!(TRANSFORMS.sampling().is_regular());
    }

    #[test]
    fn test_annotations() {
        assert_eq!(ACTIVE_SENSOR_PHYSICAL_DIMENSIONS.units(), Some("micron"));
        assert_eq!(F_STOP.section(), Some("lens"));
        assert_eq!(T_STOP.section(), None);
        assert_eq!(LENS_MAKE.units(), None);
        assert!(!TIMING_MODE.description().is_empty());
    }

    #[test]
    fn test_shutter_angle_range() {
        assert!(!SHUTTER_ANGLE.validate(&Value::Int(0)));
        assert!(SHUTTER_ANGLE.validate(&Value::Int(1)));
        assert!(SHUTTER_ANGLE.validate(&Value::Int(360_000)));
        assert!(!SHUTTER_ANGLE.validate(&Value::Int(360_001)));
    }

    #[test]
    fn test_timing_mode() {
        assert!(TIMING_MODE.validate(&Value::from("external")));
        assert!(!TIMING_MODE.validate(&Value::from("External")));
    }
}
