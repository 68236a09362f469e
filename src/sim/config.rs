//! 仿真配置
//!
//! 启动时从 JSON 读取；缺失或格式错误的键在启动阶段即报错。

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::lb::LbStrategy;
use crate::policy::PolicyConfig;
use crate::traffic::DistributionKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub areas: AreasConfig,
    pub flow_classes: FlowClassesConfig,
    pub servers: ServersConfig,
    pub admission_policy: PolicyConfig,
    #[serde(default)]
    pub load_balancer: LoadBalancerConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreasConfig {
    #[serde(rename = "M")]
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowClassesConfig {
    #[serde(rename = "J")]
    pub count: usize,
    pub arrival_rates: Vec<f64>,
    pub service_rates: Vec<f64>,
    pub bitrates: Vec<f64>,
    /// 每个 server 一行，每行 J 个上限
    pub max_flows_per_server: Vec<Vec<u32>>,
    #[serde(default)]
    pub arrival_distribution: DistributionKind,
    #[serde(default)]
    pub service_distribution: DistributionKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServersConfig {
    #[serde(rename = "N")]
    pub count: usize,
    pub access_bandwidth: Vec<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadBalancerConfig {
    #[serde(default)]
    pub strategy: LbStrategy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// 仿真时长（秒）；`time > duration` 的事件被丢弃
    pub duration: f64,
    /// 运行级 seed；缺省时所有随机流从熵源初始化
    #[serde(default)]
    pub seed: Option<u64>,
}

impl SimConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let cfg: SimConfig = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    /// 结构校验：数组长度、速率为正、带宽与时长非负。
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fc = &self.flow_classes;
        let j = fc.count;
        expect_len("flow_classes.arrival_rates", j, fc.arrival_rates.len())?;
        expect_len("flow_classes.service_rates", j, fc.service_rates.len())?;
        expect_len("flow_classes.bitrates", j, fc.bitrates.len())?;
        for (i, &r) in fc.arrival_rates.iter().enumerate() {
            expect_positive(&format!("flow_classes.arrival_rates[{i}]"), r)?;
        }
        for (i, &r) in fc.service_rates.iter().enumerate() {
            expect_positive(&format!("flow_classes.service_rates[{i}]"), r)?;
        }
        for (i, &b) in fc.bitrates.iter().enumerate() {
            expect_non_negative(&format!("flow_classes.bitrates[{i}]"), b)?;
        }

        let n = self.servers.count;
        expect_len("servers.access_bandwidth", n, self.servers.access_bandwidth.len())?;
        expect_len("flow_classes.max_flows_per_server", n, fc.max_flows_per_server.len())?;
        for (i, row) in fc.max_flows_per_server.iter().enumerate() {
            expect_len(&format!("flow_classes.max_flows_per_server[{i}]"), j, row.len())?;
        }
        for (i, &bw) in self.servers.access_bandwidth.iter().enumerate() {
            expect_non_negative(&format!("servers.access_bandwidth[{i}]"), bw)?;
        }

        match self.admission_policy {
            PolicyConfig::SimpleHeuristic { utility_threshold } => {
                expect_non_negative("admission_policy.utility_threshold", utility_threshold)?
            }
            PolicyConfig::UtilizationCap { max_utilization } => {
                expect_non_negative("admission_policy.max_utilization", max_utilization)?
            }
        }

        expect_non_negative("simulation.duration", self.simulation.duration)
    }

    /// 运行前校验：在结构校验之外，要求至少一个 server。
    pub fn validate_for_run(&self) -> Result<(), ConfigError> {
        self.validate()?;
        if self.servers.count == 0 {
            return Err(ConfigError::NoServers);
        }
        Ok(())
    }
}

fn expect_len(field: &str, expected: usize, actual: usize) -> Result<(), ConfigError> {
    if expected != actual {
        return Err(ConfigError::LengthMismatch {
            field: field.into(),
            expected,
            actual,
        });
    }
    Ok(())
}

fn expect_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && value > 0.0) {
        return Err(ConfigError::NonPositive {
            field: field.into(),
            value,
        });
    }
    Ok(())
}

fn expect_non_negative(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(value.is_finite() && value >= 0.0) {
        return Err(ConfigError::Negative {
            field: field.into(),
            value,
        });
    }
    Ok(())
}
