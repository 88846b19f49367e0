use cdnetworks_domain::{AttrValue, CdnClientBuilder, CdnResult, DomainRecord, OriginConfig};

#[tokio::main]
async fn main() -> CdnResult<()> {
    let client = CdnClientBuilder::from_env()?.rate_limit(5, 5).build()?;

    let config = DomainRecord::declared(
        "cdn.example.com",
        OriginConfig::new(vec!["203.0.113.10".to_string(), "203.0.113.11".to_string()]),
    );

    // Plan: defaults are resolved, the origin host header mirrors the domain
    let planned = client.plan_domain(&config, None)?;
    println!("Planned: {:#?}", planned);

    let state = client.create_domain(&planned).await?;
    println!("Created domain id: {:?}", state.domain_id.as_str());
    println!("CNAME: {:?}", state.cname.as_str());
    println!("Status: {:?}", state.status.as_str());

    // Switch the client IP header and pause acceleration
    let mut changed = config.clone();
    changed.header_of_clientip = AttrValue::known("X-Forwarded-For");
    changed.enabled = AttrValue::Known(false);
    let planned = client.plan_domain(&changed, Some(&state))?;
    let state = client.update_domain(&planned, &state).await?;
    println!("Updated, enabled = {:?}", state.enabled.as_known());

    match client.read_domain(&state).await? {
        Some(current) => println!("Current status: {:?}", current.status.as_str()),
        None => println!("Domain disappeared"),
    }

    client.delete_domain(&state).await?;
    println!("Deleted");

    Ok(())
}
