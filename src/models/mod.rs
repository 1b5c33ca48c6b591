pub mod autor;
pub mod autor_llibre;
pub mod biblioteca;
pub mod exemplar;
pub mod llibre;
pub mod persona;
pub mod prestec;

pub use autor::AutorAmbLlibres;
pub use llibre::LlibreAmbAutors;
