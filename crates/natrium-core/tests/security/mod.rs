mod mlock_verification;
