use stepline_operations::standard_pipeline;

pub(crate) fn run() {
    let pipeline = standard_pipeline();
    for (index, name) in pipeline.step_names().enumerate() {
        println!("{}. {name}", index + 1);
    }
}
