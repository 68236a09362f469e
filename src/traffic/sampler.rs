//! 随机采样器
//!
//! 每个采样器持有独立的随机流；相同 seed 的两个采样器产生相同序列，
//! 与其他采样器的调用顺序无关。

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Exp, Poisson};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// 采样器的随机流来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerSeed {
    Fixed(u64),
    /// 从操作系统熵源初始化，不可复现
    Entropy,
}

impl SamplerSeed {
    fn rng(self) -> StdRng {
        match self {
            SamplerSeed::Fixed(seed) => StdRng::seed_from_u64(seed),
            SamplerSeed::Entropy => StdRng::from_entropy(),
        }
    }
}

/// 从运行级 seed 派生第 `stream` 条随机流的 seed（SplitMix64 混合）。
pub fn derive_stream_seed(base: u64, stream: u64) -> u64 {
    let mut z = base.wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// 配置中可选的分布形状；`rate` 按均值 `1/rate` 映射到各分布。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionKind {
    #[default]
    Exponential,
    Poisson,
    Constant,
}

impl DistributionKind {
    /// 按速率构造采样器：指数分布用 `rate`，Poisson 与常数用均值 `1/rate`。
    pub fn sampler(self, rate: f64, seed: SamplerSeed) -> Result<Sampler, ConfigError> {
        check_positive("rate", rate)?;
        match self {
            DistributionKind::Exponential => Sampler::exponential(rate, seed),
            DistributionKind::Poisson => Sampler::poisson(1.0 / rate, seed),
            DistributionKind::Constant => Sampler::constant(1.0 / rate),
        }
    }
}

/// 非负实数采样器
#[derive(Debug, Clone)]
pub enum Sampler {
    Exponential { dist: Exp<f64>, rng: StdRng },
    /// 返回实数形式的计数
    Poisson { dist: Poisson<f64>, rng: StdRng },
    Constant { value: f64 },
}

impl Sampler {
    pub fn exponential(rate: f64, seed: SamplerSeed) -> Result<Self, ConfigError> {
        check_positive("rate", rate)?;
        let dist = Exp::new(rate).map_err(|_| ConfigError::NonPositive {
            field: "rate".into(),
            value: rate,
        })?;
        Ok(Sampler::Exponential {
            dist,
            rng: seed.rng(),
        })
    }

    pub fn poisson(mean: f64, seed: SamplerSeed) -> Result<Self, ConfigError> {
        check_positive("mean", mean)?;
        let dist = Poisson::new(mean).map_err(|_| ConfigError::NonPositive {
            field: "mean".into(),
            value: mean,
        })?;
        Ok(Sampler::Poisson {
            dist,
            rng: seed.rng(),
        })
    }

    pub fn constant(value: f64) -> Result<Self, ConfigError> {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::Negative {
                field: "value".into(),
                value,
            });
        }
        Ok(Sampler::Constant { value })
    }

    /// 采样一个非负值；推进该采样器自己的随机流。
    pub fn sample(&mut self) -> f64 {
        match self {
            Sampler::Exponential { dist, rng } => dist.sample(rng),
            Sampler::Poisson { dist, rng } => dist.sample(rng),
            Sampler::Constant { value } => *value,
        }
    }
}

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive {
            field: field.into(),
            value,
        })
    }
}
