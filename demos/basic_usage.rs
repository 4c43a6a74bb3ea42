use chrono::Utc;
use tracing_subscriber::EnvFilter;

use shadowfax_flash::models::{
    Communications, DropLocationDetails, LocationDetails, OrderDetails, UserDetails, Validations,
};
use shadowfax_flash::{Config, FlashClient};

#[tokio::main]
async fn main() -> Result<(), shadowfax_flash::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    // Reads SHADOWFAX_API_KEY, SHADOWFAX_CREDITS_KEY, SHADOWFAX_STORE_BRAND_ID
    // and SHADOWFAX_ENVIRONMENT (default staging) from the environment or .env.
    let config = Config::from_env()?;
    let client = FlashClient::new(config.api_key.clone(), config.environment);

    let validation = client
        .validate_credits_key(&config.credits_key, &config.store_brand_id)
        .await?;
    println!("credits key valid: {}", validation.is_valid);

    let pickup = LocationDetails::new(
        "John's Store",
        "9876543210",
        "123, 1st Cross, Koramangala, Bangalore - 560034",
        Some("Near Forum Mall".to_string()),
        12.9352,
        77.6245,
    )?;
    let drop = DropLocationDetails::new(
        "Jane Smith",
        "9876543211",
        "456, 27th Main, HSR Layout, Bangalore - 560102",
        Some("Near BDA Complex".to_string()),
        12.9113,
        77.6475,
    )?;

    let serviceability = client.check_serviceability(&pickup, &drop).await?;
    println!("serviceable: {}", serviceability.serviceable);
    if !serviceability.serviceable {
        return Ok(());
    }

    let order = OrderDetails::new(format!("ORDER{}", Utc::now().timestamp_millis()), false, 150.0)
        .collect_delivery_charge_from_customer();
    let user = UserDetails::new("9876543210", config.credits_key.as_str())?;

    let response = client
        .create_order(
            &pickup,
            &drop,
            &order,
            &user,
            &Validations::new(false, true),
            &Communications::default(),
        )
        .await?;

    println!("order created: {}", response.flash_order_id);
    if let Some(otp) = &response.drop_otp {
        println!("drop otp: {otp}");
    }

    let tracking = client.track_order(&response.flash_order_id).await?;
    println!("status: {:?}", tracking.status);
    if let Some(rider) = &tracking.rider_name {
        println!(
            "rider: {rider} ({})",
            tracking.rider_contact_number.as_deref().unwrap_or("-")
        );
    }

    Ok(())
}
