//! Integer project options

use serde::Serialize;

use crate::{ApiStage, OptionError, ProjectOption, RawValue, Version};

/// Options whose values are integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum IntegerOption {
    AndroidTestShardCount,
    AndroidSdkChannel,
    /// Level of model-only mode requested by an IDE sync
    IdeBuildModelOnlyVersion,
    /// API level of the device an IDE build targets
    IdeTargetDeviceApi,
    /// Buffer sizes in kilobytes used when reading class files and writing dex files
    DexingReadBufferSize,
    DexingWriteBufferSize,
    DexingNumberOfBuckets,
    PreOMaxNumberOfFeatures,
    Aapt2ThreadPoolSize,
    R8MaxWorkers,
    /// >=1 caps snapshots, 0 disables retention, <0 keeps unlimited snapshots
    TestFailureRetention,
    ManagedDeviceShardPoolSize,
    /// 0 or negative never times out
    ManagedDeviceSetupTimeoutMinutes,
    /// 0 or negative means no limit
    ManagedDeviceMaxConcurrentDevices,

    // Removed
    ThreadPoolSize,
}

impl ProjectOption for IntegerOption {
    type Value = i32;

    const ALL: &'static [Self] = &[
        IntegerOption::AndroidTestShardCount,
        IntegerOption::AndroidSdkChannel,
        IntegerOption::IdeBuildModelOnlyVersion,
        IntegerOption::IdeTargetDeviceApi,
        IntegerOption::DexingReadBufferSize,
        IntegerOption::DexingWriteBufferSize,
        IntegerOption::DexingNumberOfBuckets,
        IntegerOption::PreOMaxNumberOfFeatures,
        IntegerOption::Aapt2ThreadPoolSize,
        IntegerOption::R8MaxWorkers,
        IntegerOption::TestFailureRetention,
        IntegerOption::ManagedDeviceShardPoolSize,
        IntegerOption::ManagedDeviceSetupTimeoutMinutes,
        IntegerOption::ManagedDeviceMaxConcurrentDevices,
        IntegerOption::ThreadPoolSize,
    ];

    const KIND: &'static str = "integer";

    fn property_name(&self) -> &'static str {
        match self {
            IntegerOption::AndroidTestShardCount => "android.androidTest.numShards",
            IntegerOption::AndroidSdkChannel => "android.sdk.channel",
            IntegerOption::IdeBuildModelOnlyVersion => "android.injected.build.model.only.versioned",
            IntegerOption::IdeTargetDeviceApi => "android.injected.build.api",
            IntegerOption::DexingReadBufferSize => "android.dexingReadBuffer.size",
            IntegerOption::DexingWriteBufferSize => "android.dexingWriteBuffer.size",
            IntegerOption::DexingNumberOfBuckets => "android.dexingNumberOfBuckets",
            IntegerOption::PreOMaxNumberOfFeatures => "android.maxNumberOfFeaturesBeforeOreo",
            IntegerOption::Aapt2ThreadPoolSize => "android.aapt2ThreadPoolSize",
            IntegerOption::R8MaxWorkers => "android.r8.maxWorkers",
            IntegerOption::TestFailureRetention => {
                "android.experimental.testOptions.emulatorSnapshots.maxSnapshotsForTestFailures"
            }
            IntegerOption::ManagedDeviceShardPoolSize => {
                "android.experimental.androidTest.numManagedDeviceShards"
            }
            IntegerOption::ManagedDeviceSetupTimeoutMinutes => {
                "android.experimental.testOptions.managedDevices.setupTimeoutMinutes"
            }
            IntegerOption::ManagedDeviceMaxConcurrentDevices => {
                "android.experimental.testOptions.managedDevices.maxConcurrentDevices"
            }
            IntegerOption::ThreadPoolSize => "android.threadPoolSize",
        }
    }

    fn stage(&self) -> ApiStage {
        match self {
            IntegerOption::IdeBuildModelOnlyVersion | IntegerOption::IdeTargetDeviceApi => {
                ApiStage::Stable
            }
            IntegerOption::ThreadPoolSize => ApiStage::Removed {
                since: Version::Before4_0,
                message: "The android.threadPoolSize property has no effect",
            },
            _ => ApiStage::Experimental,
        }
    }

    fn parse(&self, value: &RawValue) -> Result<i32, OptionError> {
        match value {
            RawValue::Text(text) => text.parse::<i32>().map_err(|_| self.invalid_value(value)),
            // Numbers narrow by truncation.
            RawValue::Integer(n) => Ok(*n as i32),
            RawValue::Float(n) => Ok(*n as i32),
            RawValue::Boolean(_) => Err(self.invalid_value(value)),
        }
    }
}
