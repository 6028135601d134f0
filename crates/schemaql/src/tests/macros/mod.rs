mod sdl_document;
