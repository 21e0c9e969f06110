/// Opaque customer identifier as it appears in the dataset.
/// Example: `CG-12520`
pub type CustomerId = String;
/// Region identifier (the dataset `State` column).
/// Examples: `California`, `Kentucky`
pub type RegionId = String;
/// Opaque product identifier; determines the product display name.
/// Example: `FUR-BO-10001798`
pub type ProductId = String;
/// Display label of a named bucket.
/// Examples: `Los Angeles`, `Bookcases`, `Consumer`
pub type BucketName = String;
/// Raw query parameter text before validation.
/// Examples: `2024-01-05`, `CG-12520`
pub type ParamValue = String;
/// Human-readable message carried in error envelopes.
/// Example: `Invalid parameters.`
pub type ErrorMessage = String;
