//! The host-facing module: a named dispatch table over [`Natrium`].
//!
//! Calling convention:
//! - arguments are positional [`Value`]s, checked for dynamic type first
//!   (a mismatch is a [`HostError::BadArgument`], like a VM argument check)
//! - a successful operation returns its result value(s)
//! - a failed operation returns `[Nil, Bytes(message)]`; callers branch on
//!   the first value being nil and read the second for diagnostics

use natrium_core::{
    CryptoError, Natrium, HASH_BYTES_MAX, HASH_BYTES_MIN, HASH_KEYBYTES_MAX, RANDOM_BYTES_MAX,
    SIGN_BYTES, SIGN_PUBLICKEYBYTES, SIGN_SECRETKEYBYTES, SYMMETRIC_ABYTES, SYMMETRIC_KEYBYTES,
    SYMMETRIC_NONCEBYTES,
};

use crate::config::HostConfig;
use crate::error::HostError;
use crate::value::Value;

/// Binding version exported as the `VERSION` constant.
pub const VERSION: &str = concat!("natrium-", env!("CARGO_PKG_VERSION"));

type OpResult = Result<Vec<Value>, CryptoError>;
type HostFn = fn(&Natrium, &Args<'_>) -> Result<OpResult, HostError>;

/// One dispatch table entry.
struct Reg {
    name: &'static str,
    func: HostFn,
}

/// Registration order is the order [`Module::function_names`] reports.
const REGISTRY: &[Reg] = &[
    Reg {
        name: "version",
        func: version,
    },
    Reg {
        name: "random_bytes",
        func: random_bytes,
    },
    Reg {
        name: "sign_keypair",
        func: sign_keypair,
    },
    Reg {
        name: "generic_hash",
        func: generic_hash,
    },
    Reg {
        name: "aead_encrypt",
        func: aead_encrypt,
    },
    Reg {
        name: "aead_decrypt",
        func: aead_decrypt,
    },
    Reg {
        name: "sign_detached",
        func: sign_detached,
    },
    Reg {
        name: "sign_verify_detached",
        func: sign_verify_detached,
    },
];

// ---------------------------------------------------------------------------
// Argument checking
// ---------------------------------------------------------------------------

static NIL: Value = Value::Nil;

/// Positional arguments of one call, with 1-based typed accessors.
struct Args<'a> {
    function: &'static str,
    values: &'a [Value],
}

impl<'a> Args<'a> {
    fn get(&self, position: usize) -> &'a Value {
        position
            .checked_sub(1)
            .and_then(|i| self.values.get(i))
            .unwrap_or(&NIL)
    }

    fn bad(&self, position: usize, expected: &'static str) -> HostError {
        HostError::BadArgument {
            function: self.function,
            position,
            expected,
            got: self.get(position).type_name(),
        }
    }

    fn bytes(&self, position: usize) -> Result<&'a [u8], HostError> {
        self.get(position)
            .as_bytes()
            .ok_or_else(|| self.bad(position, "string"))
    }

    fn integer(&self, position: usize) -> Result<i64, HostError> {
        self.get(position)
            .as_integer()
            .ok_or_else(|| self.bad(position, "number"))
    }
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

fn version(ctx: &Natrium, _args: &Args<'_>) -> Result<OpResult, HostError> {
    Ok(Ok(vec![Value::from(ctx.version())]))
}

fn random_bytes(ctx: &Natrium, args: &Args<'_>) -> Result<OpResult, HostError> {
    let count = args.integer(1)?;
    Ok(ctx.random_bytes(count).map(|b| vec![Value::from(b)]))
}

fn sign_keypair(ctx: &Natrium, _args: &Args<'_>) -> Result<OpResult, HostError> {
    Ok(ctx.sign_keypair().map(|kp| {
        vec![
            Value::from(kp.secret.expose()),
            Value::from(&kp.public[..]),
        ]
    }))
}

fn generic_hash(ctx: &Natrium, args: &Args<'_>) -> Result<OpResult, HostError> {
    let message = args.bytes(1)?;
    let key = args.bytes(2)?;
    let hash_len = args.integer(3)?;
    Ok(ctx
        .generic_hash(message, key, hash_len)
        .map(|h| vec![Value::from(h)]))
}

fn aead_encrypt(ctx: &Natrium, args: &Args<'_>) -> Result<OpResult, HostError> {
    let message = args.bytes(1)?;
    let ad = args.bytes(2)?;
    let nonce = args.bytes(3)?;
    let key = args.bytes(4)?;
    Ok(ctx
        .aead_encrypt(message, ad, nonce, key)
        .map(|c| vec![Value::from(c)]))
}

fn aead_decrypt(ctx: &Natrium, args: &Args<'_>) -> Result<OpResult, HostError> {
    let ciphertext = args.bytes(1)?;
    let ad = args.bytes(2)?;
    let nonce = args.bytes(3)?;
    let key = args.bytes(4)?;
    Ok(ctx
        .aead_decrypt(ciphertext, ad, nonce, key)
        .map(|p| vec![Value::from(p.expose())]))
}

fn sign_detached(ctx: &Natrium, args: &Args<'_>) -> Result<OpResult, HostError> {
    let message = args.bytes(1)?;
    let secret_key = args.bytes(2)?;
    Ok(ctx
        .sign_detached(message, secret_key)
        .map(|sig| vec![Value::from(&sig[..])]))
}

fn sign_verify_detached(ctx: &Natrium, args: &Args<'_>) -> Result<OpResult, HostError> {
    let message = args.bytes(1)?;
    let signature = args.bytes(2)?;
    let public_key = args.bytes(3)?;
    Ok(ctx
        .sign_verify_detached(message, signature, public_key)
        .map(|m| vec![Value::from(m)]))
}

// ---------------------------------------------------------------------------
// Module
// ---------------------------------------------------------------------------

/// An opened module, ready to dispatch calls.
#[derive(Debug)]
pub struct Module {
    ctx: Natrium,
    config: HostConfig,
}

impl Module {
    /// Initialize the crypto backend and open the module.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Initialization`] if the backend cannot start.
    /// This is fatal: no module exists, so no operation can run.
    pub fn open(config: HostConfig) -> Result<Self, HostError> {
        let ctx = Natrium::init().map_err(|e| {
            tracing::error!(module = %config.module_name, "crypto backend initialization failed: {e:?}");
            HostError::Initialization(e)
        })?;
        tracing::info!(
            module = %config.module_name,
            version = VERSION,
            backend = ctx.version(),
            "module opened"
        );
        Ok(Self { ctx, config })
    }

    /// Registration name from the configuration.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.module_name
    }

    #[must_use]
    pub const fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Names of all operations, in registration order.
    pub fn function_names() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|r| r.name)
    }

    /// Constants exported alongside the functions, in export order.
    #[must_use]
    pub fn constants() -> Vec<(&'static str, Value)> {
        vec![
            ("VERSION", Value::from(VERSION)),
            ("SYMMETRIC_KEYBYTES", Value::from(SYMMETRIC_KEYBYTES)),
            ("SYMMETRIC_NONCEBYTES", Value::from(SYMMETRIC_NONCEBYTES)),
            ("SIGN_PUBLICKEYBYTES", Value::from(SIGN_PUBLICKEYBYTES)),
            ("SIGN_SECRETKEYBYTES", Value::from(SIGN_SECRETKEYBYTES)),
            ("SIGN_BYTES", Value::from(SIGN_BYTES)),
            ("SYMMETRIC_ABYTES", Value::from(SYMMETRIC_ABYTES)),
            ("HASH_BYTES_MIN", Value::from(HASH_BYTES_MIN)),
            ("HASH_BYTES_MAX", Value::from(HASH_BYTES_MAX)),
            ("HASH_KEYBYTES_MAX", Value::from(HASH_KEYBYTES_MAX)),
            ("RANDOM_BYTES_MAX", Value::from(RANDOM_BYTES_MAX)),
        ]
    }

    /// Look up a single exported constant.
    #[must_use]
    pub fn constant(name: &str) -> Option<Value> {
        Self::constants()
            .into_iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    /// Call operation `name` with positional `args`.
    ///
    /// Operation failures are returned as `Ok([Nil, Bytes(message)])`.
    ///
    /// # Errors
    ///
    /// - [`HostError::UnknownFunction`] if `name` is not registered
    /// - [`HostError::BadArgument`] if an argument is missing or mistyped
    pub fn call(&self, name: &str, args: &[Value]) -> Result<Vec<Value>, HostError> {
        let reg = REGISTRY
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| HostError::UnknownFunction(name.to_owned()))?;

        let args = Args {
            function: reg.name,
            values: args,
        };
        match (reg.func)(&self.ctx, &args)? {
            Ok(values) => Ok(values),
            Err(e) => {
                if self.config.log_failures {
                    tracing::debug!(
                        module = %self.config.module_name,
                        function = reg.name,
                        kind = e.kind().as_str(),
                        "operation failed: {e}"
                    );
                }
                Ok(vec![Value::Nil, Value::from(e.to_string().as_str())])
            }
        }
    }
}
