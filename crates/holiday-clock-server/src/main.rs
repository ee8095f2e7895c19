#[tokio::main]
async fn main() {
    holiday_clock_server::start_server().await;
}
