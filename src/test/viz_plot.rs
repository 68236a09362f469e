use crate::edge::ServerId;
use crate::sim::SimTime;
use crate::stats::Statistics;
use crate::traffic::ClassId;
use crate::viz::PlotData;

#[test]
fn plot_data_groups_series_by_server_and_counts_by_class() {
    let mut st = Statistics::new(3, 2);
    st.record_arrival(ClassId(0));
    st.record_admission(ClassId(0), ServerId(1));
    st.record_server_state(SimTime(0.5), ServerId(1), 1, 1.0);
    st.record_arrival(ClassId(2));
    st.record_admission(ClassId(2), ServerId(0));
    st.record_server_state(SimTime(1.0), ServerId(0), 1, 4.0);
    st.record_arrival(ClassId(2));
    st.record_rejection(ClassId(2));
    st.record_server_state(SimTime(2.0), ServerId(1), 0, 0.0);

    let plot = PlotData::from_statistics(&st);
    assert_eq!(plot.bandwidth.len(), 2);
    assert_eq!(plot.bandwidth[0].server_id, 0);
    assert_eq!(plot.bandwidth[1].points.len(), 2);
    assert_eq!(plot.bandwidth[1].points[1].bandwidth_usage, 0.0);

    // class 1 没有到达，不出现
    let classes: Vec<(usize, u64, u64)> = plot
        .classes
        .iter()
        .map(|c| (c.class, c.accepted, c.rejected))
        .collect();
    assert_eq!(classes, vec![(0, 1, 0), (2, 1, 1)]);

    let v = serde_json::to_value(&plot).expect("serialize plot");
    assert_eq!(v["bandwidth"][0]["points"][0]["t"], 1.0);
}
