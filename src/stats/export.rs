//! 结果导出：快照写 CSV，汇总写 JSON

use std::io::Write;

use super::statistics::{ServerSnapshot, Summary};

/// 按插入顺序写出快照行，表头 `time,server_id,active_flows,bandwidth_usage`。
pub fn write_snapshots_csv<W: Write>(snapshots: &[ServerSnapshot], out: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    if snapshots.is_empty() {
        wtr.write_record(["time", "server_id", "active_flows", "bandwidth_usage"])?;
    }
    for snap in snapshots {
        wtr.serialize(snap)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_summary_json<W: Write>(summary: &Summary, out: W) -> serde_json::Result<()> {
    serde_json::to_writer_pretty(out, summary)
}
