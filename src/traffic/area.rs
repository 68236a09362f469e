//! Area：流量源
//!
//! 每个 class 持有一个到达间隔采样器和一个服务时长采样器，以及固定码率。

use tracing::debug;

use super::sampler::{DistributionKind, Sampler, SamplerSeed, derive_stream_seed};
use super::{AreaId, ClassId};
use crate::error::ConfigError;

/// 构造 area 所需的逐 class 流量参数
#[derive(Debug, Clone, Copy)]
pub struct TrafficProfile<'a> {
    pub arrival_rates: &'a [f64],
    pub service_rates: &'a [f64],
    pub bitrates: &'a [f64],
    pub arrival_kind: DistributionKind,
    pub service_kind: DistributionKind,
}

impl<'a> TrafficProfile<'a> {
    /// 到达间隔与服务时长都服从指数分布
    pub fn exponential(
        arrival_rates: &'a [f64],
        service_rates: &'a [f64],
        bitrates: &'a [f64],
    ) -> Self {
        Self {
            arrival_rates,
            service_rates,
            bitrates,
            arrival_kind: DistributionKind::Exponential,
            service_kind: DistributionKind::Exponential,
        }
    }
}

#[derive(Debug)]
pub struct Area {
    id: AreaId,
    arrivals: Vec<Sampler>,
    durations: Vec<Sampler>,
    bitrates: Vec<f64>,
}

impl Area {
    /// 为每个 class 构造采样器。
    ///
    /// `seed` 为 `Some` 时，class `j` 的到达流使用派生流 `2j`，时长流使用 `2j+1`；
    /// 为 `None` 时每个采样器从熵源初始化。
    pub fn configure_traffic(
        id: AreaId,
        profile: &TrafficProfile<'_>,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        let classes = profile.arrival_rates.len();
        for (field, len) in [
            ("service_rates", profile.service_rates.len()),
            ("bitrates", profile.bitrates.len()),
        ] {
            if len != classes {
                return Err(ConfigError::LengthMismatch {
                    field: field.into(),
                    expected: classes,
                    actual: len,
                });
            }
        }

        let stream = |n: usize| match seed {
            Some(base) => SamplerSeed::Fixed(derive_stream_seed(base, n as u64)),
            None => SamplerSeed::Entropy,
        };

        let mut arrivals = Vec::with_capacity(classes);
        let mut durations = Vec::with_capacity(classes);
        for j in 0..classes {
            let lam = profile.arrival_rates[j];
            let mu = profile.service_rates[j];
            arrivals.push(
                profile
                    .arrival_kind
                    .sampler(lam, stream(2 * j))
                    .map_err(|e| rename_field(e, format!("arrival_rates[{j}]")))?,
            );
            durations.push(
                profile
                    .service_kind
                    .sampler(mu, stream(2 * j + 1))
                    .map_err(|e| rename_field(e, format!("service_rates[{j}]")))?,
            );
        }
        for (j, &b) in profile.bitrates.iter().enumerate() {
            if !b.is_finite() || b < 0.0 {
                return Err(ConfigError::Negative {
                    field: format!("bitrates[{j}]"),
                    value: b,
                });
            }
        }

        debug!(area = id.0, classes, "area 流量已配置");
        Ok(Self {
            id,
            arrivals,
            durations,
            bitrates: profile.bitrates.to_vec(),
        })
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    pub fn num_classes(&self) -> usize {
        self.bitrates.len()
    }

    /// 下一条 flow 的到达间隔
    pub fn generate_inter_arrival(&mut self, class: ClassId) -> f64 {
        self.check_class(class);
        self.arrivals[class.0].sample()
    }

    /// 一条 flow 的服务时长
    pub fn generate_duration(&mut self, class: ClassId) -> f64 {
        self.check_class(class);
        self.durations[class.0].sample()
    }

    pub fn bitrate(&self, class: ClassId) -> f64 {
        self.check_class(class);
        self.bitrates[class.0]
    }

    fn check_class(&self, class: ClassId) {
        assert!(
            class.0 < self.num_classes(),
            "class {} out of range for area {} ({} classes)",
            class.0,
            self.id.0,
            self.num_classes()
        );
    }
}

fn rename_field(err: ConfigError, field: String) -> ConfigError {
    match err {
        ConfigError::NonPositive { value, .. } => ConfigError::NonPositive { field, value },
        ConfigError::Negative { value, .. } => ConfigError::Negative { field, value },
        other => other,
    }
}
